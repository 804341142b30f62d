//! Matching and ranking engine.
//!
//! `Engine::suggest` turns raw romanized input plus an externally produced
//! segmentation into a deduplicated, ranked candidate list. Three strategies
//! cover the input space: an exact path when the best scheme spans the whole
//! text, a partial path when it does not, and a verbatim path when no usable
//! scheme exists. The exact and partial paths stitch head matches onto
//! re-segmented tails; the partial path first tries anchor-prefix matching
//! against the shortcut key.
//!
//! All failure is expressed as empty results: the engine never errors.

use fancy_regex::Regex;
use once_cell::sync::Lazy;
use std::cmp::Ordering;

use ahash::AHashSet;
use libcantonese_core::{
    dedup, is_separator, scheme_length, strip_spaces_tones, strip_tones, tones, Candidate, Config,
    LexiconEntry, LexiconStore, Segmentation, SyllableScheme,
};

use crate::segment::Segmentor;

/// `yu` is ambiguous between the `jyu` syllable and the `yu` final; rewrite
/// it to `jyu` unless a c/s/j/z initial or a k/m/ng final claims it.
static YU_REWRITE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?<!c|s|j|z)yu(?!k|m|ng)").expect("valid rewrite pattern"));

fn normalize_yu(text: &str) -> String {
    YU_REWRITE.replace_all(text, "jyu").into_owned()
}

/// Engine-internal wrapper carrying the lexicon row order and whether the
/// match consumed the entire query. Never leaks into the public surface.
#[derive(Debug, Clone)]
struct RowCandidate {
    candidate: Candidate,
    row: i64,
    exact: bool,
}

/// Ranking rule for row candidates: exact matches first; among non-exact
/// rows longer surface text wins; on a length tie the smaller row is
/// promoted only when the row gap exceeds `promotion_gap`. Everything else
/// is `Equal` so a stable sort keeps the store's natural order.
///
/// Deliberately not a total order: `Equal` under the gap is not transitive
/// (a ~ b and b ~ c do not imply a ~ c once the combined gap exceeds the
/// threshold). Only use this through a stable sort of one pooled batch.
fn rank(a: &RowCandidate, b: &RowCandidate, promotion_gap: i64) -> Ordering {
    match (a.exact, b.exact) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => {
            let a_len = a.candidate.text.chars().count();
            let b_len = b.candidate.text.chars().count();
            if a_len != b_len {
                return b_len.cmp(&a_len);
            }
            if (a.row - b.row).abs() > promotion_gap {
                a.row.cmp(&b.row)
            } else {
                Ordering::Equal
            }
        }
    }
}

fn entry_candidate(entry: LexiconEntry, input: &str) -> Candidate {
    Candidate::word_with_lexicon_text(
        entry.word.clone(),
        entry.romanization,
        input,
        entry.word,
    )
    .with_notation(entry.notation)
}

/// Candidate resolution engine over a lexicon store and a segmenter.
///
/// Stateless and reentrant: every call is a pure function of its inputs and
/// the read-only store, so concurrent use needs no locking beyond what the
/// store itself requires.
pub struct Engine<L, S> {
    store: L,
    segmentor: S,
    config: Config,
}

impl<L: LexiconStore, S: Segmentor> Engine<L, S> {
    pub fn new(store: L, segmentor: S) -> Self {
        Self::with_config(store, segmentor, Config::default())
    }

    pub fn with_config(store: L, segmentor: S, config: Config) -> Self {
        Self {
            store,
            segmentor,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &L {
        &self.store
    }

    /// Resolve ranked candidates for `text` under `segmentation`.
    ///
    /// Empty text and an unready store both yield an empty list. Single
    /// characters go through the shortcut key only. The result is
    /// deduplicated by candidate identity, first seen wins.
    pub fn suggest(&self, text: &str, segmentation: &Segmentation) -> Vec<Candidate> {
        if !self.store.is_ready() {
            return Vec::new();
        }
        match text.chars().count() {
            0 => Vec::new(),
            1 => dedup(self.shortcut(text)),
            _ => dedup(self.fetch(text, segmentation)),
        }
    }

    fn fetch(&self, text: &str, segmentation: &Segmentation) -> Vec<Candidate> {
        let stripped: String = text.chars().filter(|c| !is_separator(*c)).collect();
        tracing::debug!(input = text, schemes = segmentation.len(), "fetch");
        let Some(best_scheme) = segmentation.first().filter(|s| !s.is_empty()) else {
            return self.process_verbatim(&stripped);
        };
        let converted = normalize_yu(&stripped);
        if scheme_length(best_scheme) == converted.chars().count() {
            self.process(&converted, text, segmentation)
        } else {
            self.process_partial(&stripped, text, segmentation)
        }
    }

    /// Unsegmented strategy: progressively shrink the input from the right,
    /// looking each leading prefix up by both keys, and keep the first-seen
    /// unique results.
    fn process_verbatim(&self, text: &str) -> Vec<Candidate> {
        let chars: Vec<char> = text.chars().collect();
        let mut rounds: Vec<Candidate> = Vec::new();
        for dropped in 0..chars.len() {
            let leading: String = chars[..chars.len() - dropped].iter().collect();
            rounds.extend(self.match_for(&leading));
            rounds.extend(self.shortcut(&leading));
        }
        dedup(rounds)
    }

    /// Exact strategy: the best scheme spans the whole normalized text.
    fn process(&self, text: &str, origin: &str, schemes: &Segmentation) -> Vec<Candidate> {
        let text_count = text.chars().count();
        let has_separators = text_count != origin.chars().count();
        let candidates = self.match_schemes(schemes, has_separators, Some(origin.chars().count()));
        if has_separators {
            // Separators pin the segmentation; do not second-guess it.
            return candidates;
        }
        let mut full_processed = self.match_for(text);
        full_processed.extend(self.shortcut(text));
        let backup = self.process_verbatim(text);

        let fallback = |candidates: Vec<Candidate>| {
            let mut all = full_processed.clone();
            all.extend(candidates);
            all.extend(backup.clone());
            all
        };

        let Some(first) = candidates.first() else {
            return fallback(candidates);
        };
        let head_len = first.input.chars().count();
        if head_len == text_count {
            return fallback(candidates);
        }
        let tail: String = text.chars().skip(head_len).collect();
        let tail_segmentation = self.segmentor.segment(&tail);
        if tail_segmentation.first().map_or(true, |s| s.is_empty()) {
            return fallback(candidates);
        }
        let mut tail_candidates = self.match_for(&tail);
        tail_candidates.extend(self.shortcut(&tail));
        tail_candidates.extend(self.match_schemes(&tail_segmentation, false, None));
        let tail_candidates = dedup(tail_candidates);
        if tail_candidates.is_empty() {
            return fallback(candidates);
        }
        let concatenated = self.stitch(&candidates, &tail_candidates, head_len);

        let mut out = full_processed;
        out.extend(concatenated);
        out.extend(candidates);
        out.extend(backup);
        out
    }

    /// Partial strategy: the best scheme covers only a prefix. Anchor-prefix
    /// matching runs first; tail stitching is the fallback.
    fn process_partial(&self, text: &str, origin: &str, segmentation: &Segmentation) -> Vec<Candidate> {
        let text_count = text.chars().count();
        let has_separators = text_count != origin.chars().count();
        let candidates =
            self.match_schemes(segmentation, has_separators, Some(origin.chars().count()));
        if has_separators {
            return candidates;
        }
        let mut full_processed = self.match_for(text);
        full_processed.extend(self.shortcut(text));
        let backup = self.process_verbatim(text);

        let fallback = |candidates: Vec<Candidate>| {
            let mut all = full_processed.clone();
            all.extend(candidates);
            all.extend(backup.clone());
            all
        };

        let Some(first) = candidates.first() else {
            return fallback(candidates);
        };
        let head_len = first.input.chars().count();
        if head_len == text_count {
            return fallback(candidates);
        }

        // Anchor strings: first letter of every scheme syllable plus the
        // first letter of whatever follows the scheme's coverage.
        let anchors: Vec<String> = segmentation
            .iter()
            .map(|scheme| {
                let mut anchor: String = scheme
                    .iter()
                    .filter_map(|syllable| syllable.chars().next())
                    .collect();
                if let Some(next) = text.chars().nth(scheme_length(scheme)) {
                    anchor.push(next);
                }
                anchor
            })
            .collect();
        let prefixes: Vec<Candidate> = anchors
            .iter()
            .flat_map(|anchor| self.shortcut(anchor))
            .filter(|candidate| strip_spaces_tones(&candidate.romanization).starts_with(text))
            .map(|mut candidate| {
                candidate.input = text.to_string();
                candidate
            })
            .collect();
        if !prefixes.is_empty() {
            let mut out = full_processed;
            out.extend(prefixes);
            out.extend(candidates);
            out.extend(backup);
            return out;
        }

        let tail: String = text.chars().skip(head_len).collect();
        let tail_chars: Vec<char> = tail.chars().collect();
        let tail_candidates: Vec<Candidate> = self
            .process_verbatim(&tail)
            .into_iter()
            .filter(|candidate| {
                if strip_spaces_tones(&candidate.romanization).starts_with(tail.as_str()) {
                    return true;
                }
                let anchors: Vec<char> = candidate
                    .romanization
                    .split(' ')
                    .filter_map(|syllable| syllable.chars().next())
                    .collect();
                anchors == tail_chars
            })
            .map(|mut candidate| {
                candidate.input = tail.clone();
                candidate
            })
            .collect();
        if tail_candidates.is_empty() {
            return fallback(candidates);
        }
        let concatenated = self.stitch(&candidates, &tail_candidates, head_len);

        let mut out = full_processed;
        out.extend(concatenated);
        out.extend(candidates);
        out.extend(backup);
        out
    }

    /// Head × tail cross product: the first few head matches that consumed
    /// exactly `head_len` characters, each concatenated with each tail
    /// candidate, capped at the configured combine limit.
    fn stitch(
        &self,
        candidates: &[Candidate],
        tail_candidates: &[Candidate],
        head_len: usize,
    ) -> Vec<Candidate> {
        let qualified: Vec<&Candidate> = candidates
            .iter()
            .take(self.config.stitch_head_window)
            .filter(|c| c.input.chars().count() == head_len)
            .collect();
        let mut concatenated: Vec<Candidate> = Vec::new();
        'combine: for tail in tail_candidates {
            for head in &qualified {
                concatenated.push((*head).clone() + tail.clone());
                if concatenated.len() >= self.config.stitch_combine_cap {
                    break 'combine;
                }
            }
        }
        concatenated
    }

    /// Scheme matching: query every scheme's joined syllables by the ping
    /// key, rank the pooled rows, and optionally pin the first syllable when
    /// the input carried separators.
    fn match_schemes(
        &self,
        schemes: &Segmentation,
        has_separators: bool,
        full_text_count: Option<usize>,
    ) -> Vec<Candidate> {
        let mut rows: Vec<RowCandidate> = Vec::new();
        for scheme in schemes {
            let joined: String = scheme.concat();
            let exact = full_text_count == Some(joined.chars().count());
            rows.extend(self.match_rows(&joined, exact));
        }
        rows.sort_by(|a, b| rank(a, b, self.config.rank_promotion_gap));
        let candidates: Vec<Candidate> = rows.into_iter().map(|r| r.candidate).collect();
        if !has_separators {
            return candidates;
        }
        let Some(first_syllable) = schemes.first().and_then(|s: &SyllableScheme| s.first()) else {
            return Vec::new();
        };
        let pinned = strip_tones(first_syllable);
        candidates
            .into_iter()
            .filter(|candidate| {
                let first = candidate.romanization.split(' ').next().unwrap_or_default();
                strip_tones(first) == pinned
            })
            .collect()
    }

    fn match_rows(&self, text: &str, exact: bool) -> Vec<RowCandidate> {
        self.match_rows_in(&self.store, text, exact)
    }

    /// Tone-aware phonetic lookup. With tone digits present, exact tone
    /// sequences win outright; otherwise a heuristic keeps rows whose
    /// toneless syllables are all distinct and whose syllables appear in the
    /// query as often as the query carries tone digits.
    fn match_rows_in<T: LexiconStore>(&self, store: &T, text: &str, exact: bool) -> Vec<RowCandidate> {
        let tone_digits = tones(text);
        let has_tones = !tone_digits.is_empty();
        let ping = if has_tones {
            strip_tones(text)
        } else {
            text.to_string()
        };
        if ping.is_empty() {
            return Vec::new();
        }
        let rows: Vec<RowCandidate> = store
            .query_ping(&ping)
            .into_iter()
            .map(|entry| RowCandidate {
                row: entry.row,
                exact,
                candidate: entry_candidate(entry, text),
            })
            .collect();
        if !has_tones {
            return rows;
        }
        let same_tones: Vec<RowCandidate> = rows
            .iter()
            .filter(|r| tones(&r.candidate.romanization) == tone_digits)
            .cloned()
            .collect();
        if !same_tones.is_empty() {
            return same_tones;
        }
        rows.into_iter()
            .filter(|r| {
                let romanization = &r.candidate.romanization;
                let syllables: Vec<&str> = romanization.split(' ').collect();
                let toneless = strip_tones(romanization);
                let distinct: AHashSet<&str> = toneless.split(' ').collect();
                if distinct.len() != syllables.len() {
                    return false;
                }
                let hits = syllables.iter().filter(|s| text.contains(*s)).count();
                hits == tone_digits.chars().count()
            })
            .collect()
    }

    fn match_for(&self, text: &str) -> Vec<Candidate> {
        self.match_in(&self.store, text)
    }

    pub(crate) fn match_in<T: LexiconStore>(&self, store: &T, text: &str) -> Vec<Candidate> {
        self.match_rows_in(store, text, false)
            .into_iter()
            .map(|r| r.candidate)
            .collect()
    }

    fn shortcut(&self, text: &str) -> Vec<Candidate> {
        self.shortcut_in(&self.store, text)
    }

    /// Acronym lookup: the query is normalized `y`→`j` to agree with the
    /// store's precomputed shortcut keys.
    pub(crate) fn shortcut_in<T: LexiconStore>(&self, store: &T, text: &str) -> Vec<Candidate> {
        if text.is_empty() {
            return Vec::new();
        }
        let key: String = text
            .chars()
            .map(|c| if c == 'y' { 'j' } else { c })
            .collect();
        store
            .query_shortcut(&key, self.config.shortcut_limit)
            .into_iter()
            .map(|entry| entry_candidate(entry, text))
            .collect()
    }
}
