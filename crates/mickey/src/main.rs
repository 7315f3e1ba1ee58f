//! Command line for building and serving simplemickey.com.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mickey")]
#[command(about = "Build and serve simplemickey.com")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the site with pages rendered on request
    Dev {
        /// Port to listen on (defaults to config or 7777)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Build the static site
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Preview a built site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to config or "dist")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Show where the home page would send a location
    Resolve {
        /// Full location URL, e.g. https://example.com/#invite_token=abc
        location: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so `resolve` output stays clean
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dev { port, no_open } => {
            let file_config = config::load(&cli.config)?;
            commands::dev::run(file_config, port, !no_open).await?;
        }
        Commands::Build { output, no_minify } => {
            let file_config = config::load(&cli.config)?;
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(file_config, output, minify).await?;
        }
        Commands::Serve { port, dir, no_open } => {
            let file_config = config::load(&cli.config)?;
            commands::serve::run(file_config, port, dir, !no_open).await?;
        }
        Commands::Resolve { location, json } => {
            commands::resolve::run(&location, json)?;
        }
    }

    Ok(())
}
