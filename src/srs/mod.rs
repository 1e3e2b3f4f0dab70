//! Spaced repetition core
//!
//! This module provides:
//! - Card and deck data models with per-card performance counters
//! - A simplified SM-2 scheduling algorithm (4-way rating scale)
//! - Session-scoped review queue with cursor tracking

pub mod algorithm;
pub mod models;
pub mod session;

pub use algorithm::{schedule, Rating};
pub use models::{Card, CardContent, Deck, DeckStats};
pub use session::ReviewSession;
