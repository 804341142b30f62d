//! Reverse lookups: resolve candidates from alternate keys.
//!
//! Four entry points share the engine's lookup primitives but bypass
//! segmentation: two reading-based lookups against an alternate reading
//! store (Mandarin pinyin and the Loeng Fan dictionary reading), and two
//! shape-code lookups (Cangjie and stroke codes) that validate every input
//! character against a code table before querying. Shape lookups are
//! all-or-nothing: one unmapped character rejects the whole query, while the
//! marked text still echoes the raw input back to the host.

use libcantonese_core::{dedup, Candidate, LexiconStore};

use crate::engine::Engine;
use crate::segment::Segmentor;

/// A single shape code, e.g. a Cangjie radical.
pub type ShapeCode = char;

/// Code table consumed by shape lookups: a total-but-partial map from input
/// characters to shape codes.
pub trait ShapeCodeTable {
    fn shape_code(&self, ch: char) -> Option<ShapeCode>;
}

/// Result of a shape-code lookup. `marked` is what the host should display
/// while the query is in flight: the mapped code string for a valid query,
/// the raw input when validation rejected it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedLookup {
    pub marked: String,
    pub candidates: Vec<Candidate>,
}

impl<L: LexiconStore, S: Segmentor> Engine<L, S> {
    fn direct_lookup<T: LexiconStore>(&self, store: &T, text: &str) -> Vec<Candidate> {
        let mut results = self.match_in(store, text);
        results.extend(self.shortcut_in(store, text));
        dedup(results)
    }

    /// Reading-based reverse lookup against a pinyin reading store.
    pub fn pinyin_lookup<T: LexiconStore>(&self, readings: &T, text: &str) -> Vec<Candidate> {
        if text.is_empty() || !readings.is_ready() {
            return Vec::new();
        }
        self.direct_lookup(readings, text)
    }

    /// Reading-based reverse lookup against a Loeng Fan dictionary store.
    pub fn loeng_fan_lookup<T: LexiconStore>(&self, readings: &T, text: &str) -> Vec<Candidate> {
        if text.is_empty() || !readings.is_ready() {
            return Vec::new();
        }
        self.direct_lookup(readings, text)
    }

    /// Cangjie shape-code reverse lookup.
    pub fn cangjie_lookup<T, C>(&self, shapes: &T, table: &C, text: &str) -> MarkedLookup
    where
        T: LexiconStore,
        C: ShapeCodeTable,
    {
        self.shape_lookup(shapes, table, text)
    }

    /// Stroke shape-code reverse lookup.
    pub fn stroke_lookup<T, C>(&self, shapes: &T, table: &C, text: &str) -> MarkedLookup
    where
        T: LexiconStore,
        C: ShapeCodeTable,
    {
        self.shape_lookup(shapes, table, text)
    }

    fn shape_lookup<T, C>(&self, shapes: &T, table: &C, text: &str) -> MarkedLookup
    where
        T: LexiconStore,
        C: ShapeCodeTable,
    {
        let codes: Vec<ShapeCode> = text.chars().filter_map(|c| table.shape_code(c)).collect();
        let valid = !codes.is_empty() && codes.len() == text.chars().count();
        if !valid || !shapes.is_ready() {
            tracing::debug!(input = text, "shape lookup rejected");
            return MarkedLookup {
                marked: text.to_string(),
                candidates: Vec::new(),
            };
        }
        MarkedLookup {
            marked: codes.into_iter().collect(),
            candidates: self.direct_lookup(shapes, text),
        }
    }
}
