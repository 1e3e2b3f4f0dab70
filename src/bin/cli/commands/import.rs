use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Utc;

use mnemo_lib::import::parse_vocab_csv;

use crate::app::App;

pub fn run(app: &mut App, file: &Path, deck: &str) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let rows = parse_vocab_csv(&text).context("Failed to parse CSV")?;
    if rows.is_empty() {
        bail!("No usable rows (need 客家汉字 and Hakka Pronunciation columns)");
    }

    let contents = rows.into_iter().map(|r| r.into_content()).collect();
    let added = app
        .store
        .import_cards(deck, contents, Utc::now())
        .context("Failed to save deck")?;

    println!("Imported {} cards into '{}'.", added, deck);
    Ok(())
}
