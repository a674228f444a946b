use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use cogforge::config::ScoringWeights;
use cogforge::error::CfResult;
use cogforge::inventory::Inventory;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/inventory.json")]
    inventory: String,

    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Optimize(cmd::optimize::OptimizeArgs),
    Score(cmd::score::ScoreArgs),
}

/// JSON weights become the base; flags typed on the command line win.
fn resolve_weights(
    path: Option<&str>,
    cli_weights: &ScoringWeights,
    sub_matches: Option<&ArgMatches>,
) -> CfResult<ScoringWeights> {
    let Some(path) = path else {
        return Ok(*cli_weights);
    };

    info!("Loading weights from: {}", path);
    let mut weights = ScoringWeights::load_from_file(path)?;
    if let Some(matches) = sub_matches {
        weights.merge_from_cli(cli_weights, matches);
    }
    Ok(weights)
}

fn main() {
    // Raw matches tell user input apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Loading inventory: {}", cli.inventory);
    let inventory = Inventory::load_from_file(&cli.inventory).unwrap_or_else(|e| {
        error!("Failed to load inventory: {}", e);
        process::exit(1);
    });

    let (cli_weights, sub_matches) = match &cli.command {
        Commands::Optimize(args) => (
            &args.config.weights,
            matches.subcommand_matches("optimize"),
        ),
        Commands::Score(args) => (&args.weights, matches.subcommand_matches("score")),
    };

    let weights = resolve_weights(cli.weights.as_deref(), cli_weights, sub_matches)
        .unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });

    let result = match cli.command {
        Commands::Optimize(args) => cmd::optimize::run(args, &inventory, weights),
        Commands::Score(_) => cmd::score::run(&inventory, weights),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
