//! libjyutping crate root
//!
//! Jyutping candidate resolution and ranking: a stateless `Engine` that
//! turns romanized input plus an external segmentation into a deduplicated,
//! ranked candidate list, together with the segmenter contract and
//! reverse-lookup entry points.
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `Segmentor`, `SyllableSegmentor`, `NullSegmentor` from `segment`
//! - `ShapeCodeTable`, `MarkedLookup` from `lookup`
//! - shared value types re-exported from `libcantonese-core`

pub mod engine;
pub mod lookup;
pub mod segment;

pub use engine::Engine;
pub use lookup::{MarkedLookup, ShapeCode, ShapeCodeTable};
pub use segment::{NullSegmentor, Segmentor, SyllableSegmentor};

// Convenience re-exports for common types used by callers.
pub use libcantonese_core::{
    dedup, Candidate, CandidateKind, Config, LexiconEntry, LexiconStore, MemoryLexicon, Notation,
    Segmentation, Syllable, SyllableScheme, Tone,
};

/// All standard jyutping syllables (without tone digits).
///
/// Drives the reference `SyllableSegmentor`; the engine itself never reads
/// this table.
pub const JYUTPING_SYLLABLES: &[&str] = &[
    "aa", "aai", "aau", "aam", "aan", "aang", "aap", "aat", "aak", "ai", "au", "am", "an", "ang",
    "ap", "at", "ak", "e", "ei", "eu", "em", "eng", "ek", "i", "iu", "im", "in", "ing", "ip", "it",
    "ik", "o", "oi", "ou", "om", "on", "ong", "ot", "ok", "uk", "ung", "m", "ng", "baa", "baai",
    "baau", "baan", "baang", "baat", "baak", "bai", "bau", "bam", "ban", "bang", "bat", "bak",
    "be", "bei", "beng", "bek", "biu", "bin", "bing", "bit", "bik", "bo", "bou", "bong", "bok",
    "bui", "bun", "but", "buk", "bung", "paa", "paai", "paau", "paan", "paang", "paat", "paak",
    "pai", "pau", "pan", "pang", "pat", "pak", "pe", "pei", "peng", "pek", "pik", "ping", "pit",
    "piu", "pin", "po", "pou", "pong", "pok", "pui", "pun", "put", "puk", "pung", "maa", "maai",
    "maau", "maan", "maang", "maat", "maak", "mai", "mau", "man", "mang", "mat", "mak", "me",
    "mei", "meng", "miu", "min", "ming", "mit", "mik", "mo", "mou", "mong", "mok", "mui", "mun",
    "mut", "muk", "mung", "faa", "faai", "faan", "faat", "faak", "fai", "fau", "fan", "fat", "fe",
    "fei", "fing", "fit", "fiu", "fo", "fong", "fok", "fu", "fui", "fun", "fut", "fuk", "fung",
    "daa", "daai", "daam", "daan", "daap", "daat", "daak", "dai", "dau", "dam", "dan", "dang",
    "dap", "dat", "dak", "de", "dei", "deng", "dek", "deoi", "deon", "diu", "dim", "din", "ding",
    "dip", "dit", "dik", "do", "doi", "dou", "dong", "dok", "doek", "dung", "duk", "dyun", "dyut",
    "taa", "taai", "taam", "taan", "taap", "taat", "tai", "tau", "tam", "tan", "tang", "tap",
    "tat", "tak", "tek", "teng", "teoi", "tiu", "tim", "tin", "ting", "tip", "tit", "tik", "to",
    "toi", "tou", "tong", "tok", "tung", "tuk", "tyun", "tyut", "naa", "naai", "naam", "naan",
    "naap", "naat", "nai", "nau", "nam", "nan", "nang", "nap", "nat", "ne", "nei", "neoi", "niu",
    "nim", "nin", "ning", "nip", "nik", "no", "noi", "nou", "nong", "nok", "noeng", "nung", "nuk",
    "nyun", "laa", "laai", "laam", "laan", "laap", "laat", "laak", "lai", "lau", "lam", "lan",
    "lang", "lap", "lat", "lak", "le", "lei", "lek", "leng", "leoi", "leon", "leot", "liu", "lim",
    "lin", "ling", "lip", "lit", "lik", "lo", "loi", "lou", "long", "lok", "loeng", "loek", "lung",
    "luk", "lyun", "lyut", "gaa", "gaai", "gaau", "gaam", "gaan", "gaang", "gaap", "gaat", "gaak",
    "gai", "gau", "gam", "gan", "gang", "gap", "gat", "gak", "ge", "gei", "geng", "gek", "geoi",
    "giu", "gim", "gin", "ging", "gip", "git", "gik", "go", "goi", "gou", "gon", "gong", "got",
    "gok", "goek", "goeng", "gu", "gui", "gun", "gung", "gut", "guk", "gwaa", "gwaai", "gwaan",
    "gwaang", "gwaat", "gwaak", "gwai", "gwan", "gwat", "gwik", "gwo", "gwong", "gwok", "gyun",
    "kaau", "kai", "kau", "kam", "kan", "kap", "kat", "kak", "ke", "kei", "kek", "keoi", "kiu",
    "kim", "kin", "king", "kip", "kit", "kik", "koi", "kong", "kok", "koek", "koeng", "ku", "kui",
    "kut", "kuk", "kung", "kwaa", "kwai", "kwan", "kwok", "kwong", "kyun", "kyut", "ngaa",
    "ngaai", "ngaau", "ngaam", "ngaan", "ngaang", "ngaap", "ngaat", "ngaak", "ngai", "ngau",
    "ngam", "ngan", "ngap", "ngat", "ngo", "ngoi", "ngon", "ngong", "ngok", "haa", "haai", "haau",
    "haam", "haan", "haang", "haap", "haat", "haak", "hai", "hau", "ham", "han", "hang", "hap",
    "hat", "hak", "hei", "hek", "heng", "heoi", "hin", "hing", "hip", "hit", "hiu", "him", "ho",
    "hoi", "hou", "hon", "hong", "hot", "hok", "hoe", "hoeng", "hung", "huk", "hyun", "hyut",
    "zaa", "zaai", "zaau", "zaam", "zaan", "zaang", "zaap", "zaat", "zaak", "zai", "zau", "zam",
    "zan", "zang", "zap", "zat", "zak", "ze", "zek", "zeng", "zeoi", "zeon", "zeot", "zi", "ziu",
    "zim", "zin", "zing", "zip", "zit", "zik", "zo", "zoi", "zou", "zong", "zok", "zoek", "zoeng",
    "zung", "zuk", "zyu", "zyun", "zyut", "caa", "caai", "caau", "caam", "caan", "caang", "caap",
    "caat", "caak", "cai", "cau", "cam", "can", "cang", "cap", "cat", "cak", "ce", "cek", "ceng",
    "ceoi", "ceon", "ceot", "ci", "ciu", "cim", "cin", "cing", "cip", "cit", "cik", "co", "coi",
    "cou", "cong", "cok", "coek", "coeng", "cung", "cuk", "cyu", "cyun", "saa", "saai", "saau",
    "saam", "saan", "saang", "saap", "saat", "saak", "sai", "sau", "sam", "san", "sang", "sap",
    "sat", "sak", "se", "sei", "sek", "seng", "seoi", "seon", "seot", "si", "siu", "sim", "sin",
    "sing", "sip", "sit", "sik", "so", "soi", "sou", "song", "sok", "soek", "soeng", "sung",
    "suk", "syu", "syun", "syut", "jaa", "jaai", "jaau", "jai", "jau", "jam", "jan", "jap", "jat",
    "je", "ji", "jiu", "jim", "jin", "jing", "jip", "jit", "jik", "jo", "joek", "joeng", "jung",
    "juk", "jyu", "jyun", "jyut", "waa", "waai", "waan", "waang", "waat", "waak", "wai", "wan",
    "wang", "wat", "wing", "wik", "wo", "wong", "wok", "wu", "wui", "wun", "wut",
];
