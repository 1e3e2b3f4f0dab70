//! Study mode adapters
//!
//! The three modes (flashcard reveal, multiple choice, typed answer) share
//! one commit path: every answered card goes through [`commit_answer`],
//! which updates stats and scheduling, bumps streaks, advances the session
//! queue, and persists, in that order, synchronously. Each mode module
//! only contributes card selection, question construction, and its
//! translation of the user's input into a [`Rating`].

pub mod choice;
pub mod flashcard;
pub mod typing;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::srs::algorithm::{schedule, Rating};
use crate::srs::models::Deck;
use crate::srs::session::{practice_pick, ReviewSession};
use crate::storage::{DeckStore, Result};

/// Card to ask about next: the cursor card if anything is due, otherwise a
/// free-practice pick from the whole deck.
pub fn pick_question_card(
    deck: &Deck,
    session: &ReviewSession,
    rng: &mut impl Rng,
) -> Option<usize> {
    session.current().or_else(|| practice_pick(deck, rng))
}

/// Commit one answered card.
///
/// Applies the stats update and the scheduler to the card, bumps the
/// session and lifetime streaks on a non-lapse answer, removes the card
/// from the queue when it was the cursor card, rebuilds the due queue, and
/// persists the deck snapshot. Out-of-range indices are ignored (the deck
/// may have been replaced under an old question).
pub fn commit_answer(
    store: &mut DeckStore,
    session: &mut ReviewSession,
    card_idx: usize,
    rating: Rating,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<()> {
    {
        let Some(deck) = store.active_deck_mut() else {
            return Ok(());
        };
        let Some(card) = deck.cards.get_mut(card_idx) else {
            return Ok(());
        };
        card.record_outcome(rating.is_correct(), now);
        schedule(card, rating, now);
    }

    if rating.is_correct() {
        session.bump_streak();
        let lifetime = store.lifetime_streak().saturating_add(1);
        store.set_lifetime_streak(lifetime)?;
    }

    if session.current() == Some(card_idx) {
        session.complete_current();
    }
    if let Some(deck) = store.active_deck() {
        session.rebuild(deck, now, rng);
    }
    store.persist()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::models::CardContent;
    use crate::storage::MemorySnapshotStore;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn content(chars: &str) -> CardContent {
        CardContent {
            mandarin: String::new(),
            hakka_chars: chars.to_string(),
            pronunciation: "a1".to_string(),
            english: "x".to_string(),
        }
    }

    fn store_with_cards(n: usize) -> DeckStore {
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        let contents = (0..n).map(|i| content(&format!("c{}", i))).collect();
        store.import_cards("Deck", contents, Utc::now()).unwrap();
        store
    }

    #[test]
    fn test_commit_sole_due_card_reports_all_done() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = store_with_cards(1);
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);
        assert_eq!(session.current(), Some(0));

        commit_answer(&mut store, &mut session, 0, Rating::Good, now, &mut rng).unwrap();

        // The card was scheduled a day out, so the rebuilt queue is empty
        assert_eq!(session.current(), None);
        assert_eq!(session.due_count(), 0);
        let card = &store.active_deck().unwrap().cards[0];
        assert_eq!(card.reps, 1);
        assert_eq!(card.seen_count, 1);
        assert_eq!(card.due, Some(now + Duration::milliseconds(86_400_000)));
    }

    #[test]
    fn test_commit_updates_both_streaks_on_correct() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(2);
        let mut store = store_with_cards(2);
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);

        let idx = session.current().unwrap();
        commit_answer(&mut store, &mut session, idx, Rating::Good, now, &mut rng).unwrap();

        assert_eq!(session.streak(), 1);
        assert_eq!(store.lifetime_streak(), 1);
    }

    #[test]
    fn test_lapse_does_not_bump_streaks() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = store_with_cards(1);
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);

        commit_answer(&mut store, &mut session, 0, Rating::Again, now, &mut rng).unwrap();

        assert_eq!(session.streak(), 0);
        assert_eq!(store.lifetime_streak(), 0);
        let card = &store.active_deck().unwrap().cards[0];
        assert_eq!(card.incorrect_count, 1);
        assert_eq!(card.reps, 0);
    }

    #[test]
    fn test_commit_practice_card_leaves_queue_alone() {
        // Answering a free-practice card (not at the cursor) must not pop
        // somebody else's queue entry.
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(4);
        let mut store = store_with_cards(3);

        // Schedule card 2 into the future so it is not part of the queue
        {
            let deck = store.active_deck_mut().unwrap();
            deck.cards[2].due = Some(now + Duration::days(5));
        }
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);
        assert_eq!(session.due_count(), 2);

        commit_answer(&mut store, &mut session, 2, Rating::Good, now, &mut rng).unwrap();

        // Cards 0 and 1 are still due after the rebuild
        assert_eq!(session.due_count(), 2);
    }

    #[test]
    fn test_commit_out_of_range_is_a_no_op() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = store_with_cards(1);
        let mut session = ReviewSession::new();
        session.rebuild(store.active_deck().unwrap(), now, &mut rng);

        commit_answer(&mut store, &mut session, 99, Rating::Good, now, &mut rng).unwrap();

        assert_eq!(store.active_deck().unwrap().cards[0].seen_count, 0);
    }

    #[test]
    fn test_pick_question_card_prefers_cursor() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(6);
        let store = store_with_cards(4);
        let deck = store.active_deck().unwrap();
        let mut session = ReviewSession::new();
        session.rebuild(deck, now, &mut rng);

        assert_eq!(pick_question_card(deck, &session, &mut rng), session.current());
    }

    #[test]
    fn test_pick_question_card_falls_back_to_practice() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = store_with_cards(3);
        {
            let deck = store.active_deck_mut().unwrap();
            for card in &mut deck.cards {
                card.due = Some(now + Duration::days(1));
            }
        }
        let deck = store.active_deck().unwrap();
        let mut session = ReviewSession::new();
        session.rebuild(deck, now, &mut rng);
        assert_eq!(session.current(), None);

        let pick = pick_question_card(deck, &session, &mut rng);
        assert!(matches!(pick, Some(i) if i < 3));
    }
}
