//! Tagged segment buffer for multi-pass rewriting.
//!
//! Each pass scans only `Raw` segments (untouched script text) and replaces
//! matched spans with `Done` segments (emitted Latin). A later pass can
//! therefore never re-match text that an earlier pass already produced,
//! even when a glyph's Latin output happens to collide with a pattern.
//!
//! Lookahead is one character and may cross a segment boundary: the rules
//! for the vowel-suppression mark need to see the character that follows,
//! and that character may already be Latin from a previous pass.

pub(crate) enum Piece {
    Raw(String),
    Done(String),
}

impl Piece {
    fn text(&self) -> &str {
        match self {
            Piece::Raw(s) | Piece::Done(s) => s,
        }
    }
}

/// One successful match inside a `Raw` segment: `consumed` characters are
/// replaced by the `output` Latin text. `consumed` must be at least 1.
pub(crate) struct Rewrite {
    pub consumed: usize,
    pub output: String,
}

pub(crate) struct Buffer {
    pieces: Vec<Piece>,
}

impl Buffer {
    pub fn new(input: &str) -> Self {
        let mut pieces = Vec::new();
        if !input.is_empty() {
            pieces.push(Piece::Raw(input.to_string()));
        }
        Buffer { pieces }
    }

    /// Drop characters from raw segments. Used for the ZWNJ strip.
    pub fn retain_raw(&mut self, keep: impl Fn(char) -> bool) {
        for piece in &mut self.pieces {
            if let Piece::Raw(s) = piece {
                if s.chars().any(|c| !keep(c)) {
                    *s = s.chars().filter(|&c| keep(c)).collect();
                }
            }
        }
        self.pieces.retain(|p| !p.text().is_empty());
    }

    /// Run one rewrite pass. `matcher` is called with the characters of a
    /// raw segment, the current position, and the first character of the
    /// buffer remainder past the segment end (`None` at end of input). On
    /// `Some`, the consumed span becomes a `Done` segment; otherwise the
    /// scan advances one character.
    pub fn rewrite<F>(&mut self, mut matcher: F)
    where
        F: FnMut(&[char], usize, Option<char>) -> Option<Rewrite>,
    {
        let old = std::mem::take(&mut self.pieces);

        // after[i]: first character of the nearest segment following i.
        let mut after = vec![None; old.len()];
        let mut carry = None;
        for i in (0..old.len()).rev() {
            after[i] = carry;
            carry = old[i].text().chars().next().or(carry);
        }

        let mut out: Vec<Piece> = Vec::new();
        for (i, piece) in old.into_iter().enumerate() {
            let raw = match piece {
                Piece::Done(_) => {
                    push_merged(&mut out, piece);
                    continue;
                }
                Piece::Raw(s) => s,
            };

            let chars: Vec<char> = raw.chars().collect();
            let mut pending = String::new();
            let mut pos = 0;
            while pos < chars.len() {
                match matcher(&chars, pos, after[i]) {
                    Some(r) => {
                        debug_assert!(r.consumed >= 1 && pos + r.consumed <= chars.len());
                        if !pending.is_empty() {
                            push_merged(&mut out, Piece::Raw(std::mem::take(&mut pending)));
                        }
                        pos += r.consumed;
                        push_merged(&mut out, Piece::Done(r.output));
                    }
                    None => {
                        pending.push(chars[pos]);
                        pos += 1;
                    }
                }
            }
            if !pending.is_empty() {
                push_merged(&mut out, Piece::Raw(pending));
            }
        }
        self.pieces = out;
    }

    pub fn into_string(self) -> String {
        let mut s = String::new();
        for piece in &self.pieces {
            s.push_str(piece.text());
        }
        s
    }
}

fn push_merged(out: &mut Vec<Piece>, piece: Piece) {
    match (out.last_mut(), &piece) {
        (Some(Piece::Raw(a)), Piece::Raw(b)) | (Some(Piece::Done(a)), Piece::Done(b)) => {
            a.push_str(b);
        }
        _ => out.push(piece),
    }
}

/// Character at `pos` within a raw segment, falling back to the cross-segment
/// lookahead exactly at the segment end.
pub(crate) fn peek(chars: &[char], pos: usize, after: Option<char>) -> Option<char> {
    if pos < chars.len() {
        Some(chars[pos])
    } else if pos == chars.len() {
        after
    } else {
        None
    }
}
