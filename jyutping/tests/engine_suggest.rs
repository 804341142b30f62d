//! End-to-end suggestion tests: strategy routing, stitching, anchor
//! prefixes, separator pinning, and normalization, over a hand-built
//! in-memory lexicon.

use libjyutping::{
    Candidate, CandidateKind, Engine, LexiconEntry, LexiconStore, MemoryLexicon, Notation,
    NullSegmentor, Segmentation, SyllableSegmentor,
};

fn noted(word: &str, jyutping: &str, frequency: i64) -> Notation {
    Notation::simple(word, jyutping, frequency)
}

/// Lexicon with single characters and the compound 你好.
fn full_lexicon() -> MemoryLexicon {
    let mut lexicon = MemoryLexicon::new();
    lexicon.insert("你", "nei5", noted("你", "nei5", 100));
    lexicon.insert("呢", "nei1", noted("呢", "nei1", 60));
    lexicon.insert("好", "hou2", noted("好", "hou2", 95));
    lexicon.insert("你好", "nei5 hou2", noted("你好", "nei5 hou2", 90));
    lexicon.insert("魚", "jyu4", noted("魚", "jyu4", 40));
    lexicon.insert("書", "syu1", noted("書", "syu1", 45));
    lexicon
}

fn segmentor() -> SyllableSegmentor {
    SyllableSegmentor::new(&["nei", "hou", "jyu", "syu"])
}

fn engine() -> Engine<MemoryLexicon, SyllableSegmentor> {
    Engine::new(full_lexicon(), segmentor())
}

fn texts(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.text.as_str()).collect()
}

#[test]
fn empty_text_yields_empty_result() {
    let engine = engine();
    assert!(engine.suggest("", &vec![vec!["nei5".to_string()]]).is_empty());
}

struct UnreadyStore;

impl LexiconStore for UnreadyStore {
    fn is_ready(&self) -> bool {
        false
    }

    fn query_ping(&self, _ping: &str) -> Vec<LexiconEntry> {
        Vec::new()
    }

    fn query_shortcut(&self, _key: &str, _limit: usize) -> Vec<LexiconEntry> {
        Vec::new()
    }
}

#[test]
fn unready_store_short_circuits_to_empty() {
    let engine = Engine::new(UnreadyStore, NullSegmentor);
    assert!(engine.suggest("nei5", &Vec::new()).is_empty());
}

#[test]
fn single_character_uses_shortcut_key_only() {
    let engine = engine();
    let results = engine.suggest("n", &Vec::new());
    assert_eq!(texts(&results), vec!["你", "呢"]);
    // "你好" lives under the "nh" shortcut key, not "n".
    assert!(!results.iter().any(|c| c.text == "你好"));
}

#[test]
fn fully_covered_input_skips_stitching() {
    let engine = engine();
    let segmentation: Segmentation = vec![
        vec!["nei5".to_string(), "hou2".to_string()],
        vec!["nei5".to_string()],
    ];
    let results = engine.suggest("nei5hou2", &segmentation);
    // The exact scheme match leads; the head match consumed the whole
    // input, so no cross-product expansion happened and dedup kept a
    // single 你好.
    assert_eq!(results[0].text, "你好");
    assert_eq!(results[0].input, "nei5hou2");
    assert_eq!(results.iter().filter(|c| c.text == "你好").count(), 1);
    assert!(results.iter().any(|c| c.text == "你"));
}

#[test]
fn stitching_concatenates_head_and_tail() {
    // No 你好 entry: the compound can only come from stitching.
    let mut lexicon = MemoryLexicon::new();
    lexicon.insert("你", "nei5", noted("你", "nei5", 100));
    lexicon.insert("呢", "nei1", noted("呢", "nei1", 60));
    lexicon.insert("好", "hou2", noted("好", "hou2", 95));
    let engine = Engine::new(lexicon, segmentor());
    let segmentation: Segmentation = vec![
        vec!["nei5".to_string(), "hou2".to_string()],
        vec!["nei5".to_string()],
    ];
    let results = engine.suggest("nei5hou2", &segmentation);
    let stitched = &results[0];
    assert_eq!(stitched.text, "你好");
    assert_eq!(stitched.romanization, "nei5 hou2");
    assert_eq!(stitched.input, "nei5hou2");
    assert_eq!(stitched.lexicon_text, "你好");
    assert_eq!(stitched.kind, CandidateKind::Word);
}

#[test]
fn stitching_skipped_when_tail_does_not_segment() {
    let engine = engine();
    let segmentation: Segmentation = vec![vec!["nei5".to_string()]];
    let results = engine.suggest("nei5abc", &segmentation);
    // fullProcessed is empty, the scheme match yields 你, the verbatim
    // backup adds 呢; no concatenated entries appear.
    assert_eq!(texts(&results), vec!["你", "呢"]);
    assert!(results.iter().all(|c| c.text.chars().count() == 1));
}

#[test]
fn anchor_prefix_matches_lead_partial_results() {
    let engine = engine();
    let segmentation: Segmentation = vec![vec!["nei".to_string()]];
    let results = engine.suggest("neih", &segmentation);
    // "nh" anchor hits 你好 whose toneless romanization starts with the
    // input; it outranks the bare scheme matches.
    assert_eq!(results[0].text, "你好");
    assert_eq!(results[0].input, "neih");
    assert_eq!(texts(&results), vec!["你好", "你", "呢"]);
}

#[test]
fn separators_pin_scheme_matches_only() {
    let engine = engine();
    let segmentation: Segmentation = vec![vec!["nei5".to_string(), "hou2".to_string()]];
    let results = engine.suggest("nei5'hou2", &segmentation);
    assert_eq!(texts(&results), vec!["你好"]);
    assert_eq!(results[0].romanization, "nei5 hou2");
}

#[test]
fn ambiguous_yu_is_rewritten_to_jyu() {
    let engine = engine();
    let results = engine.suggest("yu4", &vec![vec!["jyu4".to_string()]]);
    assert_eq!(texts(&results), vec!["魚"]);
}

#[test]
fn yu_keeps_its_spelling_after_s() {
    let engine = engine();
    let results = engine.suggest("syu1", &vec![vec!["syu1".to_string()]]);
    assert_eq!(results[0].text, "書");
    assert!(!results.iter().any(|c| c.text == "魚"));
}

#[test]
fn empty_segmentation_routes_to_verbatim_strategy() {
    let engine = engine();
    let results = engine.suggest("nei5hou2", &Vec::new());
    // Prefix shrinking reaches "nei5" and then the single-letter
    // shortcut, so 你 must be present even with no scheme at all.
    assert!(results.iter().any(|c| c.text == "你"));
    assert!(results.iter().any(|c| c.text == "你好"));
}

#[test]
fn exact_variant_survives_cross_scheme_dedup() {
    let engine = engine();
    // The toned scheme matches 你好 exactly; the toneless scheme surfaces
    // the same row again as a non-exact match. Dedup must keep one 你好,
    // the exact variant accounting for the whole input.
    let segmentation: Segmentation = vec![
        vec!["nei5".to_string(), "hou2".to_string()],
        vec!["nei".to_string(), "hou".to_string()],
    ];
    let results = engine.suggest("nei5hou2", &segmentation);
    let survivors: Vec<&Candidate> = results.iter().filter(|c| c.text == "你好").collect();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].input, "nei5hou2");
}

#[test]
fn suggest_result_is_free_of_duplicates() {
    let engine = engine();
    let segmentation: Segmentation = vec![
        vec!["nei5".to_string(), "hou2".to_string()],
        vec!["nei5".to_string(), "hou2".to_string()],
    ];
    let results = engine.suggest("nei5hou2", &segmentation);
    let deduped = libjyutping::dedup(results.clone());
    assert_eq!(results, deduped);
}

#[test]
fn curated_row_jumps_ahead_only_past_the_promotion_gap() {
    // Two readings of the same toneless key with a row gap over 50000:
    // the early row must come first even though it was queried second.
    let mut lexicon = MemoryLexicon::new();
    lexicon.insert_row("呢", "nei1", 60_006, noted("呢", "nei1", 60));
    lexicon.insert_row("你", "nei5", 5, noted("你", "nei5", 100));
    let engine = Engine::new(lexicon, segmentor());
    let results = engine.suggest("neiz", &vec![vec!["nei".to_string()]]);
    assert_eq!(results[0].text, "你");

    // Under the gap the store's order stands.
    let mut lexicon = MemoryLexicon::new();
    lexicon.insert_row("呢", "nei1", 40_000, noted("呢", "nei1", 60));
    lexicon.insert_row("你", "nei5", 5, noted("你", "nei5", 100));
    let engine = Engine::new(lexicon, segmentor());
    let results = engine.suggest("neiz", &vec![vec!["nei".to_string()]]);
    assert_eq!(results[0].text, "呢");
}
