//! Whitespace-separated token reading.
//!
//! Both the problem input and the contestant output are free-form streams of
//! integers. A read fails when the stream is exhausted or the next token is
//! not an integer; line structure carries no meaning.

use std::str::SplitAsciiWhitespace;

/// A cursor over the tokens of a text.
pub struct TokenStream<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_ascii_whitespace(),
        }
    }

    /// Next raw token, if any.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    /// Next token parsed as a signed integer.
    ///
    /// A token that is not an integer (or does not fit in `i64`) is consumed
    /// and reported as a failed read.
    pub fn next_int(&mut self) -> Option<i64> {
        self.tokens.next()?.parse().ok()
    }
}
