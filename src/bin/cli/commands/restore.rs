use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &mut App, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let count = app
        .store
        .restore_json(&text)
        .context("Invalid export file")?;

    println!("Restored {} decks.", count);
    Ok(())
}
