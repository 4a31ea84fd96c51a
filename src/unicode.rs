//! Character-level classification for the rewrite passes.

/// Zero-width non-joiner. Stripped before any substitution pass; it only
/// affects glyph shaping, never pronunciation.
pub const ZWNJ: char = '\u{200C}';

/// Characters that end a clause for the purpose of the vowel-suppression
/// rules: a consonant carrying the suppression mark directly before one of
/// these (or at end of input) takes the terminal "u" vowel instead of
/// forming a conjunct.
pub const CLAUSE_BOUNDARY: &[char] = &[
    ')', '.', ';', ',', '"', '\'', '/', '\\', '%', '!',
];

/// Word-continuation check, close to a Unicode `\w` class. Latin output
/// from earlier passes counts as word text, which is what lets a conjunct
/// span an already-rewritten glyph. Alphabetic combining marks (a detached
/// matra, which only occurs in malformed input) also count as word text,
/// so a suppression mark before one keeps the conjunct reading rather than
/// taking the terminal "u".
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `next` is the character following the suppression mark, or `None` at end
/// of input. End of input counts as clause-final.
pub fn is_clause_final(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || CLAUSE_BOUNDARY.contains(&c),
    }
}
