//! Flashcard (reveal-and-rate) study mode
//!
//! The only mode with the full 4-way rating scale. It works strictly off
//! the due queue: an empty queue is the explicit "all done" state, with no
//! free-practice fallback.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::commit_answer;
use crate::srs::algorithm::Rating;
use crate::srs::models::{Card, Deck};
use crate::srs::session::ReviewSession;
use crate::storage::{DeckStore, Result};

/// The card currently up for review, or `None` when the session is done
pub fn current_card<'a>(deck: &'a Deck, session: &ReviewSession) -> Option<&'a Card> {
    session.current().and_then(|idx| deck.cards.get(idx))
}

/// Rate the cursor card and advance. Returns `false` when there was
/// nothing to rate (the all-done state).
pub fn rate(
    store: &mut DeckStore,
    session: &mut ReviewSession,
    rating: Rating,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<bool> {
    let Some(card_idx) = session.current() else {
        return Ok(false);
    };
    commit_answer(store, session, card_idx, rating, now, rng)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::models::CardContent;
    use crate::storage::MemorySnapshotStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_with_cards(n: usize) -> DeckStore {
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        let contents = (0..n)
            .map(|i| CardContent {
                mandarin: String::new(),
                hakka_chars: format!("c{}", i),
                pronunciation: "a1".to_string(),
                english: "x".to_string(),
            })
            .collect();
        store.import_cards("Deck", contents, Utc::now()).unwrap();
        store
    }

    #[test]
    fn test_session_drains_to_all_done() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = store_with_cards(3);
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);

        for _ in 0..3 {
            assert!(current_card(store.active_deck().unwrap(), &session).is_some());
            assert!(rate(&mut store, &mut session, Rating::Good, now, &mut rng).unwrap());
        }

        assert!(current_card(store.active_deck().unwrap(), &session).is_none());
        assert!(!rate(&mut store, &mut session, Rating::Good, now, &mut rng).unwrap());
    }

    #[test]
    fn test_again_keeps_card_in_rotation() {
        // A lapsed card gets a 0.5-day interval, so it is out of the queue
        // now but still marked studied with a future due date.
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(2);
        let mut store = store_with_cards(1);
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);

        rate(&mut store, &mut session, Rating::Again, now, &mut rng).unwrap();

        let card = &store.active_deck().unwrap().cards[0];
        assert!(card.studied);
        assert!(!card.is_due(now));
        assert!(card.is_due(now + chrono::Duration::hours(13)));
    }
}
