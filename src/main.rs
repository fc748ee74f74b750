use anyhow::Result;
use clap::{Parser, Subcommand};

use splitter::config::{paths::SplitterPaths, settings::Settings};
use splitter::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "splitter",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based shared expense splitting calculator",
    long_about = "splitter is a terminal-based expense splitting calculator: a \
                  small group records shared expenses and the app works out who \
                  owes whom. Expenses live in memory for one session; the \
                  settlement summary can be exported as a text file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("splitter Configuration");
            println!("======================");
            println!("Config file: {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Export directory: {}", settings.export_dir().display());
            if settings.default_participants.is_empty() {
                println!("  Default participants: (none)");
            } else {
                println!(
                    "  Default participants: {}",
                    settings.default_participants.join(", ")
                );
            }
        }
        Some(Commands::Tui) | None => {
            run_tui(&settings)?;
        }
    }

    Ok(())
}
