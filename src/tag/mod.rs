//! Grammatical word tagging.
//!
//! The emphasis scorer only needs a coarse category per token; the tagger is
//! a narrow seam so the heuristic default can be swapped for a real POS
//! model without touching the scoring code.

pub mod lexicon;
pub mod tagger;

pub use lexicon::LexiconTagger;
pub use tagger::{MockTagger, WordCategory, WordTagger};
