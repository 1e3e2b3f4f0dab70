use anyhow::Result;
use chrono::Utc;

use mnemo_lib::srs::algorithm::time_until;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, mistakes_only: bool, format: &OutputFormat) -> Result<()> {
    let deck = app.active_deck()?;
    let now = Utc::now();

    let mut cards: Vec<_> = deck
        .cards
        .iter()
        .filter(|c| !mistakes_only || c.incorrect_count > 0)
        .collect();
    // Soonest-due first; never-scheduled cards lead
    cards.sort_by_key(|c| c.due);

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = cards
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "hakkaChars": c.content.hakka_chars,
                        "pronunciation": c.content.pronunciation,
                        "english": c.content.english,
                        "mandarin": c.content.mandarin,
                        "seen": c.seen_count,
                        "correct": c.correct_count,
                        "incorrect": c.incorrect_count,
                        "reps": c.reps,
                        "due": c.due,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("Nothing here yet.");
                return Ok(());
            }
            for card in cards {
                println!(
                    "{}  [{}]  {}  ✓{} ✗{}  {}",
                    card.content.hakka_chars,
                    card.content.pronunciation,
                    card.content.english,
                    card.correct_count,
                    card.incorrect_count,
                    time_until(card.due, now),
                );
            }
        }
    }

    Ok(())
}
