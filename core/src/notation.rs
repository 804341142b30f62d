//! Linguistic metadata attached to a lexicon row.
//!
//! The matching engine treats this record as opaque: it is carried on
//! candidates so hosts can render comments or re-sort by frequency, but no
//! field here influences matching.

use serde::{Deserialize, Serialize};

/// Annotation record for one lexicon entry.
///
/// `frequency` is the preference score hosts may sort by; `is_sandhi` flags a
/// tone-changed reading. The remaining fields are display-only annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notation {
    pub word: String,
    pub jyutping: String,
    /// Order of this pronunciation among the word's readings.
    pub pronunciation_order: i64,
    /// Tone-change (sandhi) marker.
    pub is_sandhi: bool,
    /// Literary / colloquial reading marker.
    pub literary_colloquial: i64,
    /// Frequency-like preference score. Higher means more preferred.
    pub frequency: i64,
    pub alt_frequency: i64,
    pub part_of_speech: String,
    pub register: String,
    pub label: String,
    /// Written-form variant of the word, if any.
    pub written: String,
    /// Colloquial-form variant of the word, if any.
    pub colloquial: String,
    pub english: String,
    pub explicit: String,
    pub urdu: String,
    pub nepali: String,
    pub hindi: String,
    pub indonesian: String,
}

impl Notation {
    /// Minimal notation carrying only word, reading and frequency.
    pub fn simple<W: Into<String>, J: Into<String>>(word: W, jyutping: J, frequency: i64) -> Self {
        Self {
            word: word.into(),
            jyutping: jyutping.into(),
            frequency,
            ..Self::default()
        }
    }
}
