//! Romanized syllable primitives.
//!
//! Jyutping-style romanization: a run of lowercase phone letters followed by
//! a single tone digit `1`..`6`. Helpers here are shared by the matching
//! engine and by stores deriving lookup keys.

use serde::{Deserialize, Serialize};

/// Separator character users may type between syllables.
pub const SEPARATOR: char = '\'';

/// A Cantonese tone, parsed from a trailing digit `1`..`6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Tone1 = 1,
    Tone2 = 2,
    Tone3 = 3,
    Tone4 = 4,
    Tone5 = 5,
    Tone6 = 6,
}

impl Tone {
    /// Parse a tone from a digit character. Invalid digits yield `None`,
    /// never an error.
    pub fn of(ch: char) -> Option<Tone> {
        match ch {
            '1' => Some(Tone::Tone1),
            '2' => Some(Tone::Tone2),
            '3' => Some(Tone::Tone3),
            '4' => Some(Tone::Tone4),
            '5' => Some(Tone::Tone5),
            '6' => Some(Tone::Tone6),
            _ => None,
        }
    }

    /// The tone digit as an ASCII character.
    pub fn digit(self) -> char {
        match self {
            Tone::Tone1 => '1',
            Tone::Tone2 => '2',
            Tone::Tone3 => '3',
            Tone::Tone4 => '4',
            Tone::Tone5 => '5',
            Tone::Tone6 => '6',
        }
    }
}

/// True for valid phone letters `a`..`z`.
pub fn is_phone_letter(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// True for tone digit characters `1`..`6`.
pub fn is_tone_digit(ch: char) -> bool {
    ('1'..='6').contains(&ch)
}

/// True for the user-typed syllable separator.
pub fn is_separator(ch: char) -> bool {
    ch == SEPARATOR
}

/// Tone digits of `text`, in order of appearance.
pub fn tones(text: &str) -> String {
    text.chars().filter(|c| is_tone_digit(*c)).collect()
}

/// `text` with all tone digits removed.
pub fn strip_tones(text: &str) -> String {
    text.chars().filter(|c| !is_tone_digit(*c)).collect()
}

/// `text` with all spaces and tone digits removed.
pub fn strip_spaces_tones(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !is_tone_digit(*c))
        .collect()
}

/// One way of splitting a run of romanized characters into syllables.
pub type SyllableScheme = Vec<String>;

/// Ordered list of candidate schemes, best guess first. May be empty.
pub type Segmentation = Vec<SyllableScheme>;

/// Total number of characters covered by a scheme.
pub fn scheme_length(scheme: &[String]) -> usize {
    scheme.iter().map(|s| s.chars().count()).sum()
}

/// A validated romanized syllable: phone letters plus one trailing tone digit.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Full spelling: phone + tone digit.
    pub text: String,
    /// Spelling without the trailing tone digit.
    pub phone: String,
    /// First character of the spelling.
    pub anchor: char,
    pub tone: Tone,
}

impl Syllable {
    /// Construct from a full spelling such as `"nei5"`.
    ///
    /// Returns `None` when the text is shorter than two characters, the last
    /// character is not a tone digit, or the phone portion contains anything
    /// outside `a`..`z`.
    pub fn new(text: &str) -> Option<Syllable> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 2 {
            return None;
        }
        let tone = Tone::of(*chars.last()?)?;
        let phone: String = chars[..chars.len() - 1].iter().collect();
        if !phone.chars().all(is_phone_letter) {
            return None;
        }
        Some(Syllable {
            text: text.to_string(),
            anchor: chars[0],
            phone,
            tone,
        })
    }
}

// Identity is the full spelling: the same phone + tone implies the same
// syllable even when constructed independently.
impl PartialEq for Syllable {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl std::hash::Hash for Syllable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_parses_phone_anchor_tone() {
        let s = Syllable::new("nei5").unwrap();
        assert_eq!(s.text, "nei5");
        assert_eq!(s.phone, "nei");
        assert_eq!(s.anchor, 'n');
        assert_eq!(s.tone, Tone::Tone5);
    }

    #[test]
    fn syllable_rejects_bad_input() {
        assert!(Syllable::new("").is_none());
        assert!(Syllable::new("5").is_none());
        assert!(Syllable::new("nei").is_none()); // no tone digit
        assert!(Syllable::new("nei7").is_none()); // invalid tone
        assert!(Syllable::new("nEi5").is_none()); // bad phone letter
    }

    #[test]
    fn syllable_identity_is_text_only() {
        let a = Syllable::new("hou2").unwrap();
        let b = Syllable::new("hou2").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tone_helpers() {
        assert_eq!(tones("nei5hou2"), "52");
        assert_eq!(strip_tones("nei5hou2"), "neihou");
        assert_eq!(strip_spaces_tones("nei5 hou2"), "neihou");
        assert_eq!(tones("neihou"), "");
        assert!(Tone::of('0').is_none());
        assert!(Tone::of('7').is_none());
    }

    #[test]
    fn scheme_length_counts_characters() {
        let scheme: SyllableScheme = vec!["nei5".into(), "hou2".into()];
        assert_eq!(scheme_length(&scheme), 8);
    }
}
