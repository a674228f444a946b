use thiserror::Error;

#[derive(Error, Debug)]
pub enum CogForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Empty Population: {0}")]
    EmptyPopulation(String),

    /// An optimized item has no counterpart on the original board.
    #[error("Unmatched Item: '{icon}' placed at key {target} has no original slot")]
    UnmatchedItem { icon: String, target: u32 },

    /// An original board item does not appear in the optimized arrangement.
    #[error("Orphaned Item: item at key {key} is missing from the arrangement")]
    OrphanedItem { key: u32 },

    #[error("Invalid Move {from} -> {to}: {reason}")]
    InvalidMove { from: u32, to: u32, reason: String },
}

pub type CfResult<T> = Result<T, CogForgeError>;
