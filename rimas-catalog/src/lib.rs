//! Data model and text heuristics for the rhyme catalog.
//!
//! This crate owns the output record type, the difficulty vocabulary, and
//! the rhyme-family suffix extractor. It performs no I/O.

pub mod rhyme;
pub mod types;

pub use rhyme::extract_rhyme_family;
pub use types::{Difficulty, RhymeRecord};
