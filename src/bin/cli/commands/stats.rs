use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let deck = app.active_deck()?;
    let stats = deck.stats(Utc::now());
    let lifetime = app.store.lifetime_streak();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "deck": deck.name,
                    "stats": stats,
                    "lifetimeStreak": lifetime,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!("{}", deck.name);
            println!("  total:    {}", stats.total);
            println!("  due now:  {}", stats.due);
            println!("  new:      {}", stats.new_cards);
            println!("  review:   {}", stats.review);
            println!("  learned:  {}", stats.learned);
            println!("  mistakes: {}", stats.mistakes);
            println!("  lifetime streak: {}", lifetime);
        }
    }

    Ok(())
}
