mod commands;
mod config;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Validate signup submissions (name, email, password)", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./signup.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one submission and print the normalized user or the field errors
    Validate {
        /// Person name
        #[arg(long, default_value = "")]
        name: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Password
        #[arg(long, default_value = "")]
        password: String,

        /// Read the submission as JSON from a file, or `-` for stdin
        #[arg(long, conflicts_with_all = ["name", "email", "password"])]
        json: Option<PathBuf>,

        /// How to print field errors
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective validator settings as TOML
    Config,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `field: message` line per error
    Text,
    /// The error map as JSON
    Json,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = config::load(cli.config.as_deref())?;

    let code = match cli.command {
        Commands::Validate {
            name,
            email,
            password,
            json,
            format,
        } => {
            let source = match json {
                Some(path) => input::Source::Json(path),
                None => input::Source::Flags {
                    name,
                    email,
                    password,
                },
            };
            commands::validate::execute(&settings, source, format)?
        }
        Commands::Config => {
            commands::config::execute(&settings)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
