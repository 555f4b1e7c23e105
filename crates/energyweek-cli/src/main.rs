use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "energyweek", version, about = "Weekly energy pattern tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive weekly tracking session
    Track {
        /// Use plain level labels instead of emoji
        #[arg(long)]
        plain: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Track { plain } => commands::track::run(plain),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
