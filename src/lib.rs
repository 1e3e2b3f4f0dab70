//! Core library for mnemo, a personal spaced-repetition vocabulary trainer.
//!
//! The library owns everything with real state: the card model and its
//! scheduling algorithm (`srs`), the session due-queue (`srs::session`),
//! snapshot persistence (`storage`), CSV vocabulary import (`import`), and
//! the three study-mode adapters sharing one answer-commit path (`study`).
//! Rendering, audio, and user interaction live in the CLI binary.

pub mod import;
pub mod srs;
pub mod storage;
pub mod study;
