//! Minimal PHP token scanner backing the engine's token interface
//!
//! The engine only distinguishes opening braces and statement terminators;
//! everything else is filler. Comments and string literals are skipped so a
//! `{` or `;` inside them is never mistaken for structure.

use declor_engine::{Token, TokenKind, TokenSource};

/// Token source over a PHP source snapshot.
pub struct PhpTokenSource<'a> {
    source: &'a str,
}

impl<'a> PhpTokenSource<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl TokenSource for PhpTokenSource<'_> {
    // TODO: recognize heredoc/nowdoc openers so braces inside them are
    // skipped as well.
    fn tokens_in(&self, start: usize, end: usize) -> Vec<Token> {
        let bytes = self.source.as_bytes();
        let end = end.min(bytes.len());
        let mut tokens = Vec::new();
        let mut i = start;

        while i < end {
            match bytes[i] {
                b'{' => {
                    tokens.push(Token {
                        kind: TokenKind::OpenBrace,
                        start: i,
                        end: i + 1,
                    });
                    i += 1;
                }
                b';' => {
                    tokens.push(Token {
                        kind: TokenKind::Terminator,
                        start: i,
                        end: i + 1,
                    });
                    i += 1;
                }
                b'/' if i + 1 < end && bytes[i + 1] == b'/' => {
                    i = skip_line(bytes, i, end);
                }
                b'#' if !(i + 1 < end && bytes[i + 1] == b'[') => {
                    // `#[` opens an attribute, not a comment.
                    i = skip_line(bytes, i, end);
                }
                b'/' if i + 1 < end && bytes[i + 1] == b'*' => {
                    i = skip_block_comment(bytes, i, end);
                }
                quote @ (b'\'' | b'"') => {
                    i = skip_string(bytes, i, end, quote);
                }
                b if b.is_ascii_whitespace() => {
                    i += 1;
                }
                _ => {
                    tokens.push(Token {
                        kind: TokenKind::Other,
                        start: i,
                        end: i + 1,
                    });
                    i += 1;
                }
            }
        }

        tokens
    }
}

fn skip_line(bytes: &[u8], mut i: usize, end: usize) -> usize {
    while i < end && bytes[i] != b'\n' {
        i += 1;
    }
    i
}

fn skip_block_comment(bytes: &[u8], mut i: usize, end: usize) -> usize {
    i += 2;
    while i + 1 < end {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    end
}

fn skip_string(bytes: &[u8], mut i: usize, end: usize, quote: u8) -> usize {
    i += 1;
    while i < end {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] == quote {
            return i + 1;
        }
        i += 1;
    }
    end
}
