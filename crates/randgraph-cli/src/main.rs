//! randgraph CLI - generate, inspect and view random 2D graphs.
//!
//! Running `randgraph` without a subcommand opens the desktop demo.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use randgraph_core::{Connectivity, GenerationParams};
use randgraph_viz::Variant;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::config as config_cmd;
use commands::report::OutputFormat;
use config::Config;

/// randgraph - random 2D graphs with degree and connectivity inspection.
#[derive(Parser, Debug)]
#[command(
    name = "randgraph",
    author,
    version,
    about = "Generate and inspect random 2D graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive desktop demo (default command).
    View {
        /// Presenter to run: explorer or connected.
        #[arg(long)]
        variant: Option<Variant>,

        /// Seed for reproducible graphs.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate one graph and print its report.
    Generate {
        /// Number of nodes.
        #[arg(short, long)]
        nodes: Option<usize>,

        /// Node radius in normalized units.
        #[arg(short, long)]
        radius: Option<f32>,

        /// Force connected-mode generation.
        #[arg(long, conflicts_with = "disconnected")]
        connected: bool,

        /// Force disconnected-mode generation.
        #[arg(long)]
        disconnected: bool,

        /// Seed for reproducible graphs.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the graph (positions and edges) to this JSON file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a graph file and print its report.
    Check {
        /// Graph JSON file with `positions` and `edges`.
        path: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let command = cli.command.unwrap_or(Commands::View {
        variant: None,
        seed: None,
    });

    match command {
        Commands::View { variant, seed } => {
            let config = Config::load()?;
            commands::view::execute(&config, variant.unwrap_or(config.variant), seed)?;
        }

        Commands::Generate {
            nodes,
            radius,
            connected,
            disconnected,
            seed,
            format,
            output,
        } => {
            let config = Config::load()?;
            let connectivity = if connected {
                Connectivity::Connected
            } else if disconnected {
                Connectivity::Disconnected
            } else {
                config.connectivity
            };
            let params = GenerationParams::new(
                nodes.unwrap_or(config.node_count),
                radius.unwrap_or(config.node_radius),
                connectivity,
            );
            commands::generate::execute(params, seed.or(config.seed), format, output.as_deref())?;
        }

        Commands::Check { path, format } => {
            commands::check::execute(&path, format)?;
        }

        // Reset and Path never read the config file, so they work on a broken one.
        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&Config::load()?)?;
            }
            ConfigCommands::Set { key, value } => {
                let mut config = Config::load()?;
                config_cmd::set(&mut config, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&Config::load()?, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                config_cmd::path();
            }
        },
    }

    Ok(())
}
