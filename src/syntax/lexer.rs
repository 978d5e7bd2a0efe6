//! Whitespace tokenizer.
//!
//! Tokens are maximal runs of non-whitespace characters. There is no quoting
//! and no escaping, so tokenizing never fails; an empty result is left for the
//! caller to reject.

use super::{Span, Token};

/// Split `line` into tokens on runs of whitespace, recording each token's byte
/// span.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (idx, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(make_token(line, s, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => (),
        }
    }
    if let Some(s) = start {
        tokens.push(make_token(line, s, line.len()));
    }

    tokens
}

fn make_token(line: &str, start: usize, end: usize) -> Token<'_> {
    Token {
        text: &line[start..end],
        span: Span::new(start, end),
    }
}
