//! Multiple-choice study mode
//!
//! Shows a card's front and four answer options (the card plus up to three
//! distractors drawn from the rest of the deck). Only binary correctness is
//! known here, so the answer translates to `Good` or `Again` before it
//! reaches the scheduler.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{commit_answer, pick_question_card};
use crate::srs::algorithm::Rating;
use crate::srs::models::Deck;
use crate::srs::session::ReviewSession;
use crate::storage::{DeckStore, Result};

/// One multiple-choice question
#[derive(Debug, Clone)]
pub struct ChoiceQuestion {
    /// Deck index of the card being asked
    pub card_idx: usize,
    /// Answer option labels in presentation order
    pub options: Vec<String>,
    /// Position of the correct option within `options`
    pub answer: usize,
}

/// Build the next question: cursor card when something is due, otherwise a
/// free-practice card. `None` only when the deck is empty.
///
/// Decks smaller than four cards just yield fewer options.
pub fn next_question(
    deck: &Deck,
    session: &ReviewSession,
    rng: &mut impl Rng,
) -> Option<ChoiceQuestion> {
    let card_idx = pick_question_card(deck, session, rng)?;

    let mut pool: Vec<usize> = (0..deck.cards.len()).filter(|&i| i != card_idx).collect();
    pool.shuffle(rng);
    let mut option_indices: Vec<usize> = pool.into_iter().take(3).collect();
    option_indices.push(card_idx);
    option_indices.shuffle(rng);

    let answer = option_indices
        .iter()
        .position(|&i| i == card_idx)
        .unwrap_or(0);
    let options = option_indices
        .into_iter()
        .map(|i| deck.cards[i].content.answer_label().to_string())
        .collect();

    Some(ChoiceQuestion {
        card_idx,
        options,
        answer,
    })
}

/// Commit a picked option. Returns whether it was correct.
pub fn answer(
    store: &mut DeckStore,
    session: &mut ReviewSession,
    question: &ChoiceQuestion,
    picked: usize,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<bool> {
    let correct = picked == question.answer;
    let rating = if correct { Rating::Good } else { Rating::Again };
    commit_answer(store, session, question.card_idx, rating, now, rng)?;
    Ok(correct)
}
