//! Candidate value model.
//!
//! A `Candidate` is the engine's output value: a displayed string, its
//! romanization, the user input it accounts for, and a kind tag. Identity is
//! kind-dependent and enforced centrally here: word candidates are keyed on
//! (text, romanization) so two readings of the same surface form stay
//! distinct, while every other kind is keyed on text alone.

use crate::notation::Notation;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::Add;

/// Result kind of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateKind {
    /// A Cantonese word from the lexicon.
    Word,
    /// A cased mark such as "iPad" or "macOS".
    SpecialMark,
    Emoji,
    /// A symbol; the text is not necessarily a single character.
    Symbol,
    /// Keyboard-composed text.
    Compose,
}

/// One ranked result returned to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Displayed string.
    pub text: String,
    /// Space-joined syllable romanizations, or empty.
    pub romanization: String,
    /// The user input this candidate accounts for.
    pub input: String,
    /// Canonical (traditional) form used for bookkeeping. User invisible.
    pub lexicon_text: String,
    pub kind: CandidateKind,
    /// Pass-through lexicon metadata. Not part of identity.
    pub notation: Option<Notation>,
}

impl Candidate {
    /// A word candidate whose lexicon text equals its displayed text.
    pub fn word<T, R, I>(text: T, romanization: R, input: I) -> Self
    where
        T: Into<String>,
        R: Into<String>,
        I: Into<String>,
    {
        let text = text.into();
        Self {
            lexicon_text: text.clone(),
            text,
            romanization: romanization.into(),
            input: input.into(),
            kind: CandidateKind::Word,
            notation: None,
        }
    }

    /// A word candidate with a distinct lexicon (traditional) form.
    pub fn word_with_lexicon_text<T, R, I, L>(text: T, romanization: R, input: I, lexicon_text: L) -> Self
    where
        T: Into<String>,
        R: Into<String>,
        I: Into<String>,
        L: Into<String>,
    {
        Self {
            text: text.into(),
            romanization: romanization.into(),
            input: input.into(),
            lexicon_text: lexicon_text.into(),
            kind: CandidateKind::Word,
            notation: None,
        }
    }

    /// A special-mark candidate, e.g. "iPhone" or "GitHub".
    pub fn mark<T: Into<String>>(mark: T) -> Self {
        let mark = mark.into();
        Self {
            text: mark.clone(),
            romanization: mark.clone(),
            input: mark.clone(),
            lexicon_text: mark,
            kind: CandidateKind::SpecialMark,
            notation: None,
        }
    }

    /// An emoji candidate backed by a Cantonese word.
    pub fn emoji<E, C, R, I>(emoji: E, cantonese: C, romanization: R, input: I) -> Self
    where
        E: Into<String>,
        C: Into<String>,
        R: Into<String>,
        I: Into<String>,
    {
        Self {
            text: emoji.into(),
            romanization: romanization.into(),
            input: input.into(),
            lexicon_text: cantonese.into(),
            kind: CandidateKind::Emoji,
            notation: None,
        }
    }

    /// A symbol candidate backed by a Cantonese word.
    pub fn symbol<S, C, R, I>(symbol: S, cantonese: C, romanization: R, input: I) -> Self
    where
        S: Into<String>,
        C: Into<String>,
        R: Into<String>,
        I: Into<String>,
    {
        Self {
            text: symbol.into(),
            romanization: romanization.into(),
            input: input.into(),
            lexicon_text: cantonese.into(),
            kind: CandidateKind::Symbol,
            notation: None,
        }
    }

    /// A keyboard-compose candidate. The comment becomes the lexicon text and
    /// the secondary comment (typically a code point) the romanization.
    pub fn compose<T, I>(text: T, comment: Option<&str>, secondary_comment: Option<&str>, input: I) -> Self
    where
        T: Into<String>,
        I: Into<String>,
    {
        Self {
            text: text.into(),
            romanization: secondary_comment.unwrap_or_default().to_string(),
            input: input.into(),
            lexicon_text: comment.unwrap_or_default().to_string(),
            kind: CandidateKind::Compose,
            notation: None,
        }
    }

    /// Attach lexicon metadata.
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = Some(notation);
        self
    }

    pub fn is_word(&self) -> bool {
        self.kind == CandidateKind::Word
    }

    /// Concatenate a sequence of candidates into a single word candidate.
    ///
    /// Equivalent to repeated `+`: texts, inputs and lexicon texts are plain
    /// concatenations, romanizations are joined with a single space.
    pub fn join(candidates: &[Candidate]) -> Candidate {
        let text: String = candidates.iter().map(|c| c.text.as_str()).collect();
        let romanization: String = candidates
            .iter()
            .map(|c| c.romanization.as_str())
            .collect::<Vec<&str>>()
            .join(" ");
        let input: String = candidates.iter().map(|c| c.input.as_str()).collect();
        let lexicon_text: String = candidates.iter().map(|c| c.lexicon_text.as_str()).collect();
        Candidate::word_with_lexicon_text(text, romanization, input, lexicon_text)
    }
}

// Identity dispatches on the kind tag. A word never equals a non-word:
// word identity includes the romanization, so a cross-kind text-only match
// could not hash consistently.
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_word(), other.is_word()) {
            (true, true) => self.text == other.text && self.romanization == other.romanization,
            (false, false) => self.text == other.text,
            _ => false,
        }
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_word() {
            0u8.hash(state);
            self.text.hash(state);
            self.romanization.hash(state);
        } else {
            1u8.hash(state);
            self.text.hash(state);
        }
    }
}

impl Add for Candidate {
    type Output = Candidate;

    /// Concatenation. The result is always a word candidate; romanizations
    /// are joined with a single space.
    fn add(self, rhs: Candidate) -> Candidate {
        Candidate::word_with_lexicon_text(
            format!("{}{}", self.text, rhs.text),
            format!("{} {}", self.romanization, rhs.romanization),
            format!("{}{}", self.input, rhs.input),
            format!("{}{}", self.lexicon_text, rhs.lexicon_text),
        )
    }
}

/// Remove duplicates by full candidate identity, preserving first-seen order.
pub fn dedup(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: AHashSet<Candidate> = AHashSet::with_capacity(candidates.len());
    let mut unique: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if seen.insert(candidate.clone()) {
            unique.push(candidate);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_identity_includes_romanization() {
        let a = Candidate::word("重", "cung4", "cung4");
        let b = Candidate::word("重", "zung6", "zung6");
        let c = Candidate::word("重", "cung4", "cung4");
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn non_word_identity_is_text_only() {
        let a = Candidate::emoji("🐟", "魚", "jyu4", "jyu");
        let b = Candidate::symbol("🐟", "魚", "jyu4", "jyu4");
        assert_eq!(a, b);
        let mark = Candidate::mark("GitHub");
        let word = Candidate::word("GitHub", "", "github");
        assert_ne!(mark, word);
    }

    #[test]
    fn notation_does_not_affect_identity() {
        let plain = Candidate::word("你", "nei5", "nei5");
        let noted = Candidate::word("你", "nei5", "nei5")
            .with_notation(crate::notation::Notation::simple("你", "nei5", 100));
        assert_eq!(plain, noted);
    }

    #[test]
    fn concatenation_joins_romanization_with_space() {
        let nei = Candidate::word("你", "nei5", "nei5");
        let hou = Candidate::word("好", "hou2", "hou2");
        let joined = nei + hou;
        assert_eq!(joined.text, "你好");
        assert_eq!(joined.romanization, "nei5 hou2");
        assert_eq!(joined.input, "nei5hou2");
        assert_eq!(joined.lexicon_text, "你好");
        assert_eq!(joined.kind, CandidateKind::Word);
    }

    #[test]
    fn concatenation_is_associative() {
        let a = Candidate::word("你", "nei5", "nei");
        let b = Candidate::word("好", "hou2", "hou");
        let c = Candidate::word("嗎", "maa3", "maa");
        let left = (a.clone() + b.clone()) + c.clone();
        let right = a.clone() + (b.clone() + c.clone());
        assert_eq!(left.text, right.text);
        assert_eq!(left.input, right.input);
        assert_eq!(left.lexicon_text, right.lexicon_text);
        assert_eq!(left.romanization, right.romanization);
        assert_eq!(Candidate::join(&[a, b, c]).romanization, "nei5 hou2 maa3");
    }

    #[test]
    fn dedup_is_idempotent_and_order_preserving() {
        let list = vec![
            Candidate::word("你", "nei5", "nei"),
            Candidate::word("呢", "nei1", "nei"),
            Candidate::word("你", "nei5", "nei"),
            Candidate::word("你", "nei4", "nei"),
        ];
        let once = dedup(list);
        assert_eq!(once.len(), 3);
        assert_eq!(once[0].romanization, "nei5");
        assert_eq!(once[1].romanization, "nei1");
        assert_eq!(once[2].romanization, "nei4");
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }
}
