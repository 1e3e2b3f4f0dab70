use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let now = Utc::now();
    let names = app.store.deck_names();

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for name in &names {
                if let Some(deck) = app.store.deck(name) {
                    let stats = deck.stats(now);
                    output.push(serde_json::json!({
                        "name": deck.name,
                        "createdAt": deck.created_at,
                        "cards": stats.total,
                        "due": stats.due,
                    }));
                }
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if names.is_empty() {
                println!("No decks yet. Import vocabulary first: mnemo import <file.csv>");
                return Ok(());
            }
            for name in names {
                if let Some(deck) = app.store.deck(name) {
                    let stats = deck.stats(now);
                    println!("{} ({} cards, {} due)", deck.name, stats.total, stats.due);
                }
            }
        }
    }

    Ok(())
}
