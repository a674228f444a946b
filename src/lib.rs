pub mod api;
pub mod config;
pub mod core_types;
pub mod error;
pub mod geometry;
pub mod inventory;
pub mod optimizer;
pub mod planner;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).
