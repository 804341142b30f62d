//! Lexicon lookup contract and an in-memory reference store.
//!
//! The matching engine only ever reads the lexicon through `LexiconStore`:
//! an exact toneless-phonetic key query, a bounded acronym/shortcut key
//! query, and a readiness probe. Row identifiers reflect curation order and
//! double as an implicit frequency signal (smaller row = more common).
//!
//! `MemoryLexicon` is a correctness-first implementation of that contract,
//! deriving both lookup keys from the romanization at insert time. A
//! production store (a real database with precomputed integer keys) can
//! replace it behind the same trait.

use crate::notation::Notation;
use crate::syllable::strip_spaces_tones;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// One lexicon row as returned by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Headword text.
    pub word: String,
    /// Space-joined toned syllables, e.g. "nei5 hou2".
    pub romanization: String,
    /// Curation-order identifier. Smaller means curated earlier / more common.
    pub row: i64,
    pub notation: Notation,
}

/// Read-only keyed lookup surface the engine depends on.
///
/// Implementations must return rows in stable store order within a key.
pub trait LexiconStore {
    /// Whether the store is attached and queryable. An unready store makes
    /// every engine call short-circuit to an empty result.
    fn is_ready(&self) -> bool {
        true
    }

    /// Exact match against the toneless phonetic concatenation key
    /// (e.g. "neihou" for "nei5 hou2").
    fn query_ping(&self, ping: &str) -> Vec<LexiconEntry>;

    /// Match against the precomputed acronym/shortcut key (per-syllable
    /// first letters, `y` normalized to `j`). At most `limit` rows.
    fn query_shortcut(&self, key: &str, limit: usize) -> Vec<LexiconEntry>;
}

/// In-memory lexicon keyed on derived ping and shortcut strings.
///
/// Serializable with `serde` / `bincode` for simple persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLexicon {
    entries: Vec<LexiconEntry>,
    ping: HashMap<String, Vec<usize>>,
    shortcut: HashMap<String, Vec<usize>>,
}

/// Shortcut key for a romanization: first letter of every syllable, with
/// `y` rewritten to `j` so legacy `y` spellings and jyutping agree.
pub fn shortcut_key(romanization: &str) -> String {
    romanization
        .split_whitespace()
        .filter_map(|syllable| syllable.chars().next())
        .map(|c| if c == 'y' { 'j' } else { c })
        .collect()
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; the row identifier is the insertion position.
    pub fn insert<W, R>(&mut self, word: W, romanization: R, notation: Notation)
    where
        W: Into<String>,
        R: Into<String>,
    {
        let row = self.entries.len() as i64 + 1;
        self.insert_row(word, romanization, row, notation);
    }

    /// Insert an entry with an explicit row identifier. Useful when loading
    /// a curated table that carries its own ordering.
    pub fn insert_row<W, R>(&mut self, word: W, romanization: R, row: i64, notation: Notation)
    where
        W: Into<String>,
        R: Into<String>,
    {
        let romanization = romanization.into();
        let index = self.entries.len();
        self.ping
            .entry(strip_spaces_tones(&romanization))
            .or_default()
            .push(index);
        self.shortcut
            .entry(shortcut_key(&romanization))
            .or_default()
            .push(index);
        self.entries.push(LexiconEntry {
            word: word.into(),
            romanization,
            row,
            notation,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save the lexicon with bincode.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("create lexicon file {}", path.display()))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .with_context(|| format!("serialize lexicon to {}", path.display()))?;
        Ok(())
    }

    /// Load a lexicon produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("open lexicon file {}", path.display()))?;
        let lexicon: Self = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("deserialize lexicon from {}", path.display()))?;
        tracing::debug!(entries = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    fn collect(&self, indices: Option<&Vec<usize>>, limit: usize) -> Vec<LexiconEntry> {
        indices
            .map(|rows| {
                rows.iter()
                    .take(limit)
                    .map(|&i| self.entries[i].clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl LexiconStore for MemoryLexicon {
    fn query_ping(&self, ping: &str) -> Vec<LexiconEntry> {
        self.collect(self.ping.get(ping), usize::MAX)
    }

    fn query_shortcut(&self, key: &str, limit: usize) -> Vec<LexiconEntry> {
        self.collect(self.shortcut.get(key), limit)
    }
}

impl<T: LexiconStore + ?Sized> LexiconStore for &T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn query_ping(&self, ping: &str) -> Vec<LexiconEntry> {
        (**self).query_ping(ping)
    }

    fn query_shortcut(&self, key: &str, limit: usize) -> Vec<LexiconEntry> {
        (**self).query_shortcut(key, limit)
    }
}
