use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &App, output: Option<&Path>) -> Result<()> {
    let json = app.store.export_json().context("Failed to serialize decks")?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {} decks to {}.", app.store.deck_count(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
