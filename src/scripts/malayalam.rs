//! Malayalam (South Indian abugida) table data.

use std::sync::OnceLock;

use crate::table::ScriptTable;

/// Chandrakkala, the Malayalam vowel-suppression mark.
const VIRAMA: char = '\u{0D4D}';

const VOWELS: &[(&str, &str)] = &[
    ("അ", "a"),
    ("ആ", "aa"),
    ("ഇ", "i"),
    ("ഈ", "ee"),
    ("ഉ", "u"),
    ("ഊ", "oo"),
    ("ഋ", "ru"),
    ("എ", "e"),
    ("ഏ", "e"),
    ("ഐ", "ai"),
    ("ഒ", "o"),
    ("ഓ", "o"),
    ("ഔ", "au"),
];

const CONSONANTS: &[(&str, &str)] = &[
    ("ക", "k"),
    ("ഖ", "kh"),
    ("ഗ", "g"),
    ("ഘ", "gh"),
    ("ങ", "ng"),
    ("ച", "ch"),
    ("ഛ", "chh"),
    ("ജ", "j"),
    ("ഝ", "jh"),
    ("ഞ", "nj"),
    ("ട", "t"),
    ("ഠ", "dt"),
    ("ഡ", "d"),
    ("ഢ", "dd"),
    ("ണ", "n"),
    ("ത", "th"),
    ("ഥ", "th"),
    ("ദ", "d"),
    ("ധ", "dh"),
    ("ന", "n"),
    ("പ", "p"),
    ("ഫ", "ph"),
    ("ബ", "b"),
    ("ഭ", "bh"),
    ("മ", "m"),
    ("യ", "y"),
    ("ര", "r"),
    ("ല", "l"),
    ("വ", "v"),
    ("ശ", "sh"),
    ("ഷ", "sh"),
    ("സ", "s"),
    ("ഹ", "h"),
    ("ള", "l"),
    ("ഴ", "zh"),
    ("റ", "r"),
];

const COMPOUNDS: &[(&str, &str)] = &[
    ("ക്ക", "kk"),
    ("ഗ്ഗ", "gg"),
    ("ങ്ങ", "ng"),
    ("ച്ച", "cch"),
    ("ജ്ജ", "jj"),
    ("ഞ്ഞ", "nj"),
    ("ട്ട", "tt"),
    ("ണ്ണ", "nn"),
    ("ത്ത", "tth"),
    ("ദ്ദ", "ddh"),
    ("ദ്ധ", "ddh"),
    ("ന്ന", "nn"),
    ("ന്ത", "nth"),
    ("ന്ത്യ", "nthy"),
    ("ങ്ക", "nk"),
    ("ണ്ട", "nd"),
    ("ബ്ബ", "bb"),
    ("പ്പ", "pp"),
    ("മ്മ", "mm"),
    ("യ്യ", "yy"),
    ("ല്ല", "ll"),
    ("വ്വ", "vv"),
    ("ശ്ശ", "sh"),
    ("സ്സ", "s"),
    ("ക്സ", "ks"),
    ("ഞ്ച", "nch"),
    ("ക്ഷ", "ksh"),
    ("മ്പ", "mp"),
    ("റ്റ", "tt"),
    ("ന്റ", "nt"),
];

/// Word-final shorthand consonants.
const CHILLUS: &[(&str, &str)] = &[
    ("ൽ", "l"),
    ("ൾ", "l"),
    ("ൺ", "n"),
    ("ൻ", "n"),
    ("ർ", "r"),
    ("ൿ", "k"),
];

// ു് is the bare terminal-u spelling: modifier plus suppression mark as one
// unit, so the mark is consumed together with it.
const MODIFIERS: &[(&str, &str)] = &[
    ("ു്", "u"),
    ("ാ", "aa"),
    ("ി", "i"),
    ("ീ", "ee"),
    ("ു", "u"),
    ("ൂ", "oo"),
    ("ൃ", "ru"),
    ("െ", "e"),
    ("േ", "e"),
    ("ൈ", "y"),
    ("ൊ", "o"),
    ("ോ", "o"),
    ("ൌ", "ou"),
    ("ൗ", "au"),
    ("ഃ", "a"),
];

pub fn table() -> &'static ScriptTable {
    static INSTANCE: OnceLock<ScriptTable> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        ScriptTable::builder(VIRAMA)
            .vowels(VOWELS)
            .consonants(CONSONANTS)
            .compounds(COMPOUNDS)
            .modifiers(MODIFIERS)
            .chillus(CHILLUS)
            .anusvara('\u{0D02}', "m")
            .build()
            .expect("malayalam table data must validate")
    })
}
