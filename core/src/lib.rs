//! libcantonese-core
//!
//! Core value model and consumed contracts shared by Cantonese input
//! engines: the candidate model with kind-dependent identity, romanized
//! syllable utilities, lexicon row metadata, the abstract lexicon lookup
//! surface (with an in-memory reference store), and engine configuration.
//!
//! Public API:
//! - `Candidate` / `CandidateKind` - Output value with per-kind identity
//! - `Syllable` / `Tone` / `Segmentation` - Romanization primitives
//! - `LexiconStore` / `MemoryLexicon` - Keyed lookup contract + reference impl
//! - `Notation` - Pass-through lexicon row metadata
//! - `Config` - Ranking and lookup tunables

pub mod candidate;
pub use candidate::{dedup, Candidate, CandidateKind};

pub mod syllable;
pub use syllable::{
    is_phone_letter, is_separator, is_tone_digit, scheme_length, strip_spaces_tones, strip_tones,
    tones, Segmentation, Syllable, SyllableScheme, Tone, SEPARATOR,
};

pub mod notation;
pub use notation::Notation;

pub mod lexicon;
pub use lexicon::{shortcut_key, LexiconEntry, LexiconStore, MemoryLexicon};

pub mod config;
pub use config::Config;
