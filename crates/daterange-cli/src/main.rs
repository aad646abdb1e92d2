use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "daterange-cli", version, about = "Date range picker CLI")]
struct Cli {
    /// Use this config file instead of ~/.config/daterange/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved shortcut ranges
    Catalog {
        /// Reference time instead of the current local time
        #[arg(long)]
        now: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a range the way the trigger button shows it
    Format {
        /// Range start (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        from: Option<String>,
        /// Range end
        to: Option<String>,
        /// Text shown when there is no start date
        #[arg(long)]
        placeholder: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Feed a JSON script of gestures into a picker and print the events
    Replay {
        /// Path to the gesture script
        script: PathBuf,
        /// Reference time instead of the current local time
        #[arg(long)]
        now: Option<String>,
        /// Do not feed committed values back as the host value
        #[arg(long)]
        no_echo: bool,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("DATERANGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Catalog { now, json } => commands::catalog::run(config, now.as_deref(), json),
        Commands::Format {
            from,
            to,
            placeholder,
        } => commands::format::run(config, from.as_deref(), to.as_deref(), placeholder),
        Commands::Config { action } => commands::config::run(config, action),
        Commands::Replay {
            script,
            now,
            no_echo,
        } => commands::replay::run(config, &script, now.as_deref(), !no_echo),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "daterange-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
