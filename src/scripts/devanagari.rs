//! Devanagari (North Indian abugida) table data.
//!
//! No chillu category and no anusvara entry: Devanagari has no word-final
//! shorthand consonants, and nasalization is not romanized for this script.

use std::sync::OnceLock;

use crate::table::ScriptTable;

const VIRAMA: char = '\u{094D}';

const VOWELS: &[(&str, &str)] = &[
    ("अ", "a"),
    ("आ", "aa"),
    ("इ", "i"),
    ("ई", "ee"),
    ("उ", "u"),
    ("ऊ", "oo"),
    ("ऋ", "ri"),
    ("ऌ", "li"),
    ("ऍ", "e"),
    ("ऎ", "e"),
    ("ए", "e"),
    ("ऐ", "ai"),
    ("ऑ", "o"),
    ("ऒ", "o"),
    ("ओ", "o"),
    ("औ", "au"),
];

const CONSONANTS: &[(&str, &str)] = &[
    ("क", "k"),
    ("ख", "kh"),
    ("ग", "g"),
    ("घ", "gh"),
    ("ङ", "ng"),
    ("च", "ch"),
    ("छ", "chh"),
    ("ज", "j"),
    ("झ", "jh"),
    ("ञ", "ny"),
    ("ट", "t"),
    ("ठ", "th"),
    ("ड", "d"),
    ("ढ", "dh"),
    ("ण", "n"),
    ("त", "t"),
    ("थ", "th"),
    ("द", "d"),
    ("ध", "dh"),
    ("न", "n"),
    ("ऩ", "n"),
    ("प", "p"),
    ("फ", "ph"),
    ("ब", "b"),
    ("भ", "bh"),
    ("म", "m"),
    ("य", "y"),
    ("र", "r"),
    ("ऱ", "r"),
    ("ल", "l"),
    ("ळ", "l"),
    ("ऴ", "zh"),
    ("व", "v"),
    ("श", "sh"),
    ("ष", "sh"),
    ("स", "s"),
    ("ह", "h"),
    ("क़", "q"),
    ("ख़", "kh"),
    ("ग़", "gh"),
    ("ज़", "z"),
    ("ड़", "r"),
    ("ढ़", "rh"),
    ("फ़", "f"),
    ("य़", "y"),
];

const COMPOUNDS: &[(&str, &str)] = &[
    ("क्ष", "ksh"),
    ("त्र", "tr"),
    ("ज्ञ", "gy"),
    ("श्र", "shr"),
    ("द्व", "dv"),
    ("द्ध", "ddh"),
    ("क्क", "kk"),
    ("च्च", "cch"),
    ("ट्ट", "tt"),
    ("त्त", "tt"),
    ("द्द", "dd"),
    ("न्न", "nn"),
    ("प्प", "pp"),
    ("म्म", "mm"),
    ("ल्ल", "ll"),
];

const MODIFIERS: &[(&str, &str)] = &[
    ("ा", "aa"),
    ("ि", "i"),
    ("ी", "ee"),
    ("ु", "u"),
    ("ू", "oo"),
    ("ृ", "ri"),
    ("ॄ", "rr"),
    ("ॅ", "e"),
    ("ॆ", "e"),
    ("े", "e"),
    ("ै", "ai"),
    ("ॉ", "o"),
    ("ॊ", "o"),
    ("ो", "o"),
    ("ौ", "au"),
    ("ः", "h"),
];

pub fn table() -> &'static ScriptTable {
    static INSTANCE: OnceLock<ScriptTable> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        ScriptTable::builder(VIRAMA)
            .vowels(VOWELS)
            .consonants(CONSONANTS)
            .compounds(COMPOUNDS)
            .modifiers(MODIFIERS)
            .build()
            .expect("devanagari table data must validate")
    })
}
