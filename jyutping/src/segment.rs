//! Segmenter contract and a reference syllable segmenter.
//!
//! The engine consumes segmentations through the `Segmentor` trait and never
//! mutates what it receives. `SyllableSegmentor` is a small reference
//! implementation over a syllable inventory so hosts and tests have a
//! working collaborator; a production segmenter can replace it behind the
//! same trait.

use ahash::AHashSet;
use libcantonese_core::{is_separator, is_tone_digit, scheme_length, Segmentation, SyllableScheme};

/// External segmenter contract: split raw romanized text into candidate
/// syllable schemes, best guess first. May return an empty segmentation.
pub trait Segmentor {
    fn segment(&self, text: &str) -> Segmentation;
}

/// A segmenter that never produces a scheme. Useful when the host performs
/// its own segmentation and the engine should not attempt tail stitching.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSegmentor;

impl Segmentor for NullSegmentor {
    fn segment(&self, _text: &str) -> Segmentation {
        Vec::new()
    }
}

/// Upper bound on schemes explored per call. Inputs are short, so a small
/// cap keeps the prefix search bounded without losing useful schemes.
const SCHEME_CAP: usize = 32;

/// How many schemes a segmentation exposes to the engine.
const SCHEME_KEEP: usize = 8;

/// Prefix segmenter over a toneless syllable inventory.
///
/// A trailing tone digit attaches to the syllable it follows, so "nei5hou2"
/// yields the scheme ["nei5", "hou2"]. Schemes are ordered by covered
/// character count (more is better), then by fewer syllables.
#[derive(Debug, Clone)]
pub struct SyllableSegmentor {
    syllables: AHashSet<String>,
    max_syllable_len: usize,
}

impl SyllableSegmentor {
    pub fn new<T: AsRef<str>>(syllables: &[T]) -> Self {
        let set: AHashSet<String> = syllables
            .iter()
            .map(|s| s.as_ref().to_ascii_lowercase())
            .collect();
        let max_syllable_len = set.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        Self {
            syllables: set,
            max_syllable_len,
        }
    }

    /// Segmenter over the full jyutping inventory.
    pub fn jyutping() -> Self {
        Self::new(crate::JYUTPING_SYLLABLES)
    }

    fn expand(
        &self,
        chars: &[char],
        pos: usize,
        current: &mut SyllableScheme,
        out: &mut Vec<SyllableScheme>,
    ) {
        if out.len() >= SCHEME_CAP {
            return;
        }
        if pos == chars.len() {
            if !current.is_empty() {
                out.push(current.clone());
            }
            return;
        }
        let mut advanced = false;
        let longest = self.max_syllable_len.min(chars.len() - pos);
        for len in (1..=longest).rev() {
            let piece: String = chars[pos..pos + len].iter().collect();
            if !self.syllables.contains(&piece) {
                continue;
            }
            let mut token = piece;
            let mut next = pos + len;
            if next < chars.len() && is_tone_digit(chars[next]) {
                token.push(chars[next]);
                next += 1;
            }
            current.push(token);
            self.expand(chars, next, current, out);
            current.pop();
            advanced = true;
        }
        // No syllable starts here: the scheme covers a strict prefix.
        if !advanced && !current.is_empty() {
            out.push(current.clone());
        }
    }
}

impl Segmentor for SyllableSegmentor {
    fn segment(&self, text: &str) -> Segmentation {
        let chars: Vec<char> = text
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !is_separator(*c) && !c.is_whitespace())
            .collect();
        if chars.is_empty() {
            return Vec::new();
        }
        let mut schemes: Vec<SyllableScheme> = Vec::new();
        let mut current: SyllableScheme = Vec::new();
        self.expand(&chars, 0, &mut current, &mut schemes);

        let mut seen: AHashSet<SyllableScheme> = AHashSet::new();
        schemes.retain(|scheme| seen.insert(scheme.clone()));
        schemes.sort_by(|a, b| {
            scheme_length(b)
                .cmp(&scheme_length(a))
                .then(a.len().cmp(&b.len()))
        });
        schemes.truncate(SCHEME_KEEP);
        schemes
    }
}
