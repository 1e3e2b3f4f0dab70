mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mnemo", about = "Spaced-repetition vocabulary trainer", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum StudyModeArg {
    /// Reveal-and-rate flashcards (Again/Hard/Good/Easy)
    Flash,
    /// Multiple choice
    Choice,
    /// Typed answer
    Typing,
}

#[derive(Subcommand)]
enum Command {
    /// List decks
    Decks,

    /// Show study statistics for a deck
    Stats {
        /// Deck name (default: first deck)
        #[arg(long)]
        deck: Option<String>,
    },

    /// List cards with per-card progress
    Cards {
        /// Deck name (default: first deck)
        #[arg(long)]
        deck: Option<String>,
        /// Only cards answered incorrectly at least once
        #[arg(long)]
        mistakes: bool,
    },

    /// Run an interactive study session
    Study {
        /// Study mode
        #[arg(value_enum, default_value = "flash")]
        mode: StudyModeArg,
        /// Deck name (default: first deck)
        #[arg(long)]
        deck: Option<String>,
        /// Field to type in typing mode (english, mandarin, pronunciation);
        /// persisted as the new default
        #[arg(long)]
        answer_with: Option<String>,
    },

    /// Import vocabulary from a CSV file
    Import {
        /// CSV file with the vocabulary columns
        file: PathBuf,
        /// Deck to add the cards to (created if missing)
        #[arg(long, default_value = "Hakka Basics")]
        deck: String,
    },

    /// Export all decks and their study state as JSON
    Export {
        /// Output file (stdout if omitted)
        output: Option<PathBuf>,
    },

    /// Replace all decks from a previously exported JSON file
    Restore {
        /// Exported JSON file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Decks => {
            let app = app::App::new(cli.data_dir)?;
            commands::decks::run(&app, &cli.format)?;
        }
        Command::Stats { deck } => {
            let mut app = app::App::new(cli.data_dir)?;
            app.select_deck(deck.as_deref())?;
            commands::stats::run(&app, &cli.format)?;
        }
        Command::Cards { deck, mistakes } => {
            let mut app = app::App::new(cli.data_dir)?;
            app.select_deck(deck.as_deref())?;
            commands::cards::run(&app, mistakes, &cli.format)?;
        }
        Command::Study {
            mode,
            deck,
            answer_with,
        } => {
            let mut app = app::App::new(cli.data_dir)?;
            app.select_deck(deck.as_deref())?;
            commands::study::run(&mut app, &mode, answer_with.as_deref())?;
        }
        Command::Import { file, deck } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::import::run(&mut app, &file, &deck)?;
        }
        Command::Export { output } => {
            let app = app::App::new(cli.data_dir)?;
            commands::export::run(&app, output.as_deref())?;
        }
        Command::Restore { file } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::restore::run(&mut app, &file)?;
        }
    }

    Ok(())
}
