//! cs2ts CLI - TypeScript declarations from annotated C# models
//!
//! Commands:
//! - `cs2ts generate` - Scan projects and write TypeScript files (default)
//! - `cs2ts init` - Write a sample configuration file
//! - `cs2ts check` - Validate a configuration file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config_file;
mod discover;
mod generate;
mod init;
mod logging;

use init::ConfigFormat;
use logging::LogLevel;

#[derive(Parser)]
#[command(name = "cs2ts")]
#[command(author, version, about = "Generate TypeScript types from annotated C# models", long_about = None)]
struct Cli {
    /// Log verbosity when RUST_LOG is not set
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript files from the configured projects
    Generate {
        /// Path to the configuration file (default: ./cs2ts.config.json or ./cs2ts.config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create a sample configuration file in the current directory
    Init {
        /// Configuration file format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Json)]
        format: ConfigFormat,
    },

    /// Validate a configuration file without generating
    Check {
        /// Path to the configuration file (default: ./cs2ts.config.json or ./cs2ts.config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level);

    match cli.command.unwrap_or(Commands::Generate { config: None }) {
        Commands::Generate { config } => {
            generate::run(config)?;
        }
        Commands::Init { format } => {
            init::run(format)?;
        }
        Commands::Check { config } => {
            config_file::check(config)?;
        }
    }

    Ok(())
}
