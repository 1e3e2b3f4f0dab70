pub mod cards;
pub mod decks;
pub mod export;
pub mod import;
pub mod restore;
pub mod stats;
pub mod study;
