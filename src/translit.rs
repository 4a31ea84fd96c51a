//! The multi-pass transliteration engine.
//!
//! Pass order is load-bearing: glyph+modifier fusing must run before the
//! bare-glyph passes (a consonant would otherwise take its inherent vowel
//! and strand the modifier), and compounds must resolve before consonants
//! (a compound's constituents would otherwise be consumed one by one).
//! The segment buffer guarantees that a later pass can only ever match
//! script text no earlier pass has touched.

use tracing::{debug_span, trace};

use crate::segment::{peek, Buffer, Rewrite};
use crate::table::{Entry, ScriptTable};
use crate::unicode::{is_clause_final, is_word_char, ZWNJ};

/// Romanize `input` using `table`. Pure and deterministic; unrecognized
/// codepoints pass through verbatim, so mixed-script text is safe.
pub fn transliterate(table: &ScriptTable, input: &str) -> String {
    let _span = debug_span!("transliterate", len = input.len()).entered();
    if input.is_empty() {
        return String::new();
    }

    let mut buf = Buffer::new(input);
    buf.retain_raw(|c| c != ZWNJ);

    // Fuse glyph+modifier pairs, compounds taking priority over single
    // glyphs so a multi-glyph sequence is never partially consumed.
    fuse_modified(&mut buf, table.compounds(), table.modifiers());
    fuse_modified(&mut buf, table.vowels(), table.modifiers());
    fuse_modified(&mut buf, table.consonants(), table.modifiers());

    expand_compounds(&mut buf, table);
    resolve_consonants(&mut buf, table);
    map_entries(&mut buf, table.vowels());
    map_entries(&mut buf, table.chillus());
    if let Some((mark, latin)) = table.anusvara() {
        buf.rewrite(|chars, pos, _| {
            (chars[pos] == mark).then(|| Rewrite {
                consumed: 1,
                output: latin.to_string(),
            })
        });
    }
    // Stray modifiers left over from uncovered glyph classes.
    map_entries(&mut buf, table.modifiers());

    let out = capitalize_sentences(&buf.into_string());
    trace!(out_len = out.len(), "transliterated");
    out
}

/// Longest-first match of a table entry at `pos`.
fn match_entry<'t>(chars: &[char], pos: usize, entries: &'t [Entry]) -> Option<&'t Entry> {
    entries.iter().find(|e| {
        pos + e.key.len() <= chars.len() && chars[pos..pos + e.key.len()] == e.key[..]
    })
}

/// Replace every (glyph, trailing modifier) pair with the fused Latin form.
/// Both lookups are longest-first, so the Malayalam two-codepoint modifier
/// `ു്` wins over plain `ു` and the suppression mark is consumed with it.
fn fuse_modified(buf: &mut Buffer, glyphs: &[Entry], modifiers: &[Entry]) {
    if glyphs.is_empty() || modifiers.is_empty() {
        return;
    }
    buf.rewrite(|chars, pos, _| {
        let glyph = match_entry(chars, pos, glyphs)?;
        let modifier = match_entry(chars, pos + glyph.key.len(), modifiers)?;
        Some(Rewrite {
            consumed: glyph.key.len() + modifier.key.len(),
            output: format!("{}{}", glyph.latin, modifier.latin),
        })
    });
}

/// Unmodified compounds. With a trailing suppression mark the compound is
/// either mid-word (mark dropped, following character left for its own
/// pass) or clause-final (terminal "u"); bare compounds take the inherent
/// vowel.
fn expand_compounds(buf: &mut Buffer, table: &ScriptTable) {
    let virama = table.virama();
    buf.rewrite(|chars, pos, after| {
        let compound = match_entry(chars, pos, table.compounds())?;
        let end = pos + compound.key.len();
        if end < chars.len() && chars[end] == virama {
            let next = peek(chars, end + 1, after);
            let output = if next.is_some_and(is_word_char) {
                compound.latin.clone()
            } else {
                format!("{}u", compound.latin)
            };
            return Some(Rewrite {
                consumed: compound.key.len() + 1,
                output,
            });
        }
        Some(Rewrite {
            consumed: compound.key.len(),
            output: format!("{}a", compound.latin),
        })
    });
}

/// Inherent-vowel resolution for single consonants:
/// - no suppression mark → inherent "a";
/// - mark + word continuation → bare consonant (conjunct);
/// - mark at a clause-final position (including end of input) → "u".
fn resolve_consonants(buf: &mut Buffer, table: &ScriptTable) {
    let virama = table.virama();
    buf.rewrite(|chars, pos, after| {
        let consonant = match_entry(chars, pos, table.consonants())?;
        let end = pos + consonant.key.len();
        if end < chars.len() && chars[end] == virama {
            let next = peek(chars, end + 1, after);
            let output = if is_clause_final(next) {
                format!("{}u", consonant.latin)
            } else {
                consonant.latin.clone()
            };
            return Some(Rewrite {
                consumed: consonant.key.len() + 1,
                output,
            });
        }
        Some(Rewrite {
            consumed: consonant.key.len(),
            output: format!("{}a", consonant.latin),
        })
    });
}

/// Direct glyph→Latin replacement for the remaining bare glyphs.
fn map_entries(buf: &mut Buffer, entries: &[Entry]) {
    if entries.is_empty() {
        return;
    }
    buf.rewrite(|chars, pos, _| {
        let entry = match_entry(chars, pos, entries)?;
        Some(Rewrite {
            consumed: entry.key.len(),
            output: entry.latin.clone(),
        })
    });
}

/// Uppercase the first character after every sentence-terminal delimiter
/// (`.`, `!`, `?` plus trailing spaces), and of the string itself. Purely
/// cosmetic; no sentence semantics.
fn capitalize_sentences(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chunk_start = true;
    let mut in_delimiter = false;
    for c in s.chars() {
        match c {
            '.' | '!' | '?' => {
                out.push(c);
                in_delimiter = true;
                chunk_start = true;
            }
            ' ' if in_delimiter => out.push(c),
            _ => {
                in_delimiter = false;
                if chunk_start {
                    out.extend(c.to_uppercase());
                    chunk_start = false;
                } else {
                    out.push(c);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIRAMA: char = '\u{0D4D}';

    /// Minimal synthetic table: two consonants, one compound over them,
    /// one vowel, two modifiers, a chillu and the anusvara.
    fn table() -> ScriptTable {
        ScriptTable::builder(VIRAMA)
            .vowels(&[("അ", "a")])
            .consonants(&[("ക", "k"), ("ട", "t")])
            .compounds(&[("ക്ട", "qt")])
            .modifiers(&[("ി", "i"), ("ാ", "aa")])
            .chillus(&[("ൻ", "n")])
            .anusvara('ം', "m")
            .build()
            .unwrap()
    }

    #[test]
    fn empty_input() {
        assert_eq!(transliterate(&table(), ""), "");
    }

    #[test]
    fn deterministic() {
        let t = table();
        let input = "ക്ടിഅ കം. ട";
        assert_eq!(transliterate(&t, input), transliterate(&t, input));
    }

    #[test]
    fn bare_consonant_takes_inherent_vowel() {
        assert_eq!(transliterate(&table(), "ക"), "Ka");
    }

    #[test]
    fn bare_vowel() {
        assert_eq!(transliterate(&table(), "അ"), "A");
    }

    #[test]
    fn consonant_with_modifier_fuses() {
        assert_eq!(transliterate(&table(), "കി"), "Ki");
        assert_eq!(transliterate(&table(), "കാ"), "Kaa");
    }

    #[test]
    fn midword_suppression_forms_conjunct() {
        // ട + mark + ക: no vowel between the two consonants.
        assert_eq!(transliterate(&table(), "ട്ക"), "Tka");
    }

    #[test]
    fn suppression_at_end_takes_terminal_u() {
        assert_eq!(transliterate(&table(), "ട്"), "Tu");
    }

    #[test]
    fn suppression_before_punctuation_takes_terminal_u() {
        assert_eq!(transliterate(&table(), "ട്."), "Tu.");
        assert_eq!(transliterate(&table(), "ട്,"), "Tu,");
        assert_eq!(transliterate(&table(), "ട് ക"), "Tu ka");
    }

    #[test]
    fn suppression_before_detached_modifier_keeps_conjunct() {
        // A matra with no consonant to attach to is malformed input, but it
        // still reads as word continuation, so no terminal "u" is inserted.
        assert_eq!(transliterate(&table(), "ട്ി"), "Ti");
    }

    #[test]
    fn conjunct_spans_already_rewritten_latin() {
        // ട + mark + (ക + modifier): the pair fuses to "ki" first, and the
        // conjunct rule must still see a word continuation.
        assert_eq!(transliterate(&table(), "ട്കി"), "Tki");
    }

    #[test]
    fn compound_beats_constituent_consonants() {
        // Without compound priority this would resolve through ക and ട.
        assert_eq!(transliterate(&table(), "ക്ട"), "Qta");
    }

    #[test]
    fn compound_with_modifier() {
        assert_eq!(transliterate(&table(), "ക്ടി"), "Qti");
    }

    #[test]
    fn compound_with_suppression_midword() {
        assert_eq!(transliterate(&table(), "ക്ട്ക"), "Qtka");
    }

    #[test]
    fn compound_with_suppression_at_end() {
        assert_eq!(transliterate(&table(), "ക്ട്"), "Qtu");
    }

    #[test]
    fn chillu_maps_directly() {
        assert_eq!(transliterate(&table(), "കൻ"), "Kan");
    }

    #[test]
    fn anusvara_maps_to_m() {
        assert_eq!(transliterate(&table(), "കം"), "Kam");
    }

    #[test]
    fn stray_modifier_flushed() {
        assert_eq!(transliterate(&table(), "ി"), "I");
    }

    #[test]
    fn unrecognized_codepoints_pass_through() {
        assert_eq!(transliterate(&table(), "ക-ഘ"), "Ka-ഘ");
    }

    #[test]
    fn latin_input_passes_through_modulo_capitalization() {
        assert_eq!(transliterate(&table(), "hello world"), "Hello world");
    }

    #[test]
    fn zwnj_is_stripped_before_matching() {
        let out = transliterate(&table(), "ക\u{200C}ി");
        assert_eq!(out, "Ki");
        assert!(!out.contains('\u{200C}'));
    }

    #[test]
    fn sentence_starts_capitalized() {
        assert_eq!(
            transliterate(&table(), "word one. word two"),
            "Word one. Word two"
        );
        assert_eq!(transliterate(&table(), "a! b? c. d"), "A! B? C. D");
    }

    #[test]
    fn capitalize_handles_delimiter_runs() {
        assert_eq!(capitalize_sentences("ab.  cd"), "Ab.  Cd");
        assert_eq!(capitalize_sentences(". x"), ". X");
        assert_eq!(capitalize_sentences(""), "");
    }

    #[test]
    fn stray_virama_passes_through() {
        // A suppression mark with no consonant before it has no rule.
        assert_eq!(transliterate(&table(), "അ്"), "A\u{0D4D}");
    }
}
