use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clarvu-cli", version, about = "Clarvu CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Activity log and classification
    Activity {
        #[command(subcommand)]
        action: commands::activity::ActivityAction,
    },
    /// Reminder inspection and delivery loop
    Reminder {
        #[command(subcommand)]
        action: commands::reminder::ReminderAction,
    },
    /// Session state management
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Config { action } => commands::config::run(action),
        Commands::Activity { action } => commands::activity::run(action),
        Commands::Reminder { action } => commands::reminder::run(action),
        Commands::Session { action } => commands::session::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
