//! Dishboard CLI
//!
//! Terminal front end for the dish leaderboard:
//! - Show the starting leaderboard
//! - Run an interactive session (add and edit dishes)
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use dishboard::config::{generate_default_config, Config, LogFormat};
use dishboard::console::{write_reply, Console, OutputFormat, Reply};
use dishboard::Session;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dishboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Leaderboard of the most requested dishes")]
#[command(long_about = "Dishboard keeps a ranked list of dishes in memory.\nAdd or edit a dish and the board re-ranks itself by number of requests.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the leaderboard as the session starts
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Add and edit dishes interactively
    Session {
        /// Read commands from a file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default().context("loading default config")?,
    };

    init_logging(&config);
    tracing::debug!("Dishboard v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Show { format } => {
            let session = Session::new(config.board.leaderboard());
            let console = Console::new(session, config.board.view_options());
            tracing::info!("Leaderboard: {}", console.session().board().stats());

            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_reply(&mut out, &Reply::board(console.view()), format)?;
        }

        Commands::Session { script, format } => {
            let session = Session::new(config.board.leaderboard());
            let mut console = Console::new(session, config.board.view_options());
            let stdout = io::stdout();

            match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("opening script {}", path.display()))?;
                    tracing::info!("Running script {:?}", path);
                    console.run(BufReader::new(file), stdout.lock(), format, false)?;
                }
                None => {
                    let stdin = io::stdin();
                    let prompt = stdin.is_terminal() && format == OutputFormat::Table;
                    if prompt {
                        println!("Type `help` for commands.");
                    }
                    console.run(stdin.lock(), stdout.lock(), format, prompt)?;
                }
            }

            tracing::info!("Session ended: {}", console.session().board().stats());
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn write_default_config(output: Option<&Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing config to {}", path.display()))?;
            eprintln!("Config written to {}", path.display());
        }
        None => {
            io::stdout().write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

/// Install the global tracing subscriber; logs go to stderr
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("dishboard={}", config.logging.level))
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}
