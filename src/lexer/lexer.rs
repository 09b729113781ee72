/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      lexer/lexer.rs
 * Purpose:   Converts raw CSS source text into a flat stream of typed,
 *            position-tagged tokens.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/clawcss
 *
 * License:
 * This file is part of the CLAWCSS parser project.
 *
 * CLAWCSS is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::lexer::patterns::token_patterns;
use crate::span::Span;
use crate::token::{Token, TokenKind};

pub struct Lexer {
    source: String,
    position: usize,
    line: usize,
    column: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new CLAWCSS lexer instance from raw source text.
    ///
    /// This initializes the internal scanning state and prepares the
    /// lexer to convert source text into a stream of lexical tokens.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at byte position `0`
    /// - Line counter set to `1`, column counter to `0`
    /// - Empty token output buffer
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            position: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// This method repeatedly scans individual tokens until the end of
    /// the source is reached.
    ///
    /// # Behavior
    /// - Consumes `/* ... */` comments without emitting them
    /// - Emits structured `Token` objects for everything else; no byte
    ///   of non-comment input is ever dropped
    /// - Tracks line/column positions automatically
    ///
    /// # Output
    /// Results are written into `self.tokens`.
    pub fn scan_tokens(&mut self) {
        while self.position < self.source.len() {
            self.scan_token();
        }
    }

    /// Scans a single token (or comment) at the current position.
    ///
    /// Classification order:
    /// 1. `/* ... */` comments (consumed, never emitted)
    /// 2. The multi-character token patterns, in priority order
    /// 3. The eight single-character punctuation tokens
    /// 4. `Delim` as the catch-all for any other single character
    ///
    /// An unterminated comment consumes the rest of the input.
    fn scan_token(&mut self) {
        let rest = &self.source[self.position..];

        if let Some(stripped) = rest.strip_prefix("/*") {
            let end = stripped
                .find("*/")
                .map(|index| index + 4)
                .unwrap_or(rest.len());
            let comment = rest[..end].to_string();
            self.consume(&comment);
            return;
        }

        for (kind, pattern) in token_patterns() {
            if let Some(matched) = pattern.find(rest) {
                let lexeme = matched.as_str().to_string();
                self.emit(*kind, lexeme);
                return;
            }
        }

        // Guaranteed non-empty: scan_tokens checks the position first.
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => return,
        };
        let kind = match ch {
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            _ => TokenKind::Delim,
        };
        self.emit(kind, ch.to_string());
    }

    /// Emits one token at the current position, then advances past it.
    fn emit(&mut self, kind: TokenKind, lexeme: String) {
        let value = decode_value(kind, &lexeme);
        let span = Span::new(self.line, self.column);
        self.consume(&lexeme);
        self.tokens.push(Token {
            kind,
            lexeme,
            value,
            span,
        });
    }

    /// Advances the cursor past `text`, updating line/column counters.
    fn consume(&mut self, text: &str) {
        self.position += text.len();
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Public entry point for the lexical analysis phase.
///
/// # Example
/// ```
/// let tokens = clawcss::lexer::tokenize("a { color: red }");
/// assert_eq!(tokens[0].lexeme, "a");
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}

/// Computes a token's decoded semantic value where it differs from the
/// lexeme. Returns `None` for every kind whose value *is* its lexeme.
fn decode_value(kind: TokenKind, lexeme: &str) -> Option<String> {
    match kind {
        TokenKind::String => Some(unescape(&lexeme[1..lexeme.len() - 1])),
        TokenKind::Uri => {
            let inner = lexeme[4..lexeme.len() - 1]
                .trim_matches([' ', '\t', '\r', '\n', '\x0c']);
            let unquoted = if inner.len() >= 2
                && (inner.starts_with('"') && inner.ends_with('"')
                    || inner.starts_with('\'') && inner.ends_with('\''))
            {
                &inner[1..inner.len() - 1]
            } else {
                inner
            };
            Some(unescape(unquoted))
        }
        TokenKind::Function => Some(lexeme[..lexeme.len() - 1].to_string()),
        _ => None,
    }
}

/// Decodes backslash escapes in string and URI contents.
///
/// - An escaped newline disappears entirely
/// - `\` followed by 1-6 hex digits (plus one optional terminating
///   white space character) decodes to that code point
/// - Any other escaped character stands for itself
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.peek().copied() {
            None => out.push('\\'),

            // Escaped newline: removed from the decoded value.
            Some('\n') | Some('\x0c') => {
                chars.next();
            }
            Some('\r') => {
                chars.next();
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }

            // Unicode escape: up to six hex digits, one optional
            // terminating white space character.
            Some(next) if next.is_ascii_hexdigit() => {
                let mut hex = String::new();
                while hex.len() < 6 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                if matches!(
                    chars.peek(),
                    Some(' ') | Some('\t') | Some('\n') | Some('\r') | Some('\x0c')
                ) {
                    let terminator = chars.next();
                    if terminator == Some('\r') && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                }
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0xfffd);
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }

            Some(next) => {
                chars.next();
                out.push(next);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn classifies_the_core_vocabulary() {
        assert_eq!(
            kinds("a #b 1 2% 3px \"s\" u+0a-ff ~= |= <!-- --> @x f(x)"),
            vec![
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Hash,
                TokenKind::Whitespace,
                TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::Percentage,
                TokenKind::Whitespace,
                TokenKind::Dimension,
                TokenKind::Whitespace,
                TokenKind::String,
                TokenKind::Whitespace,
                TokenKind::UnicodeRange,
                TokenKind::Whitespace,
                TokenKind::Includes,
                TokenKind::Whitespace,
                TokenKind::DashMatch,
                TokenKind::Whitespace,
                TokenKind::Cdo,
                TokenKind::Whitespace,
                TokenKind::Cdc,
                TokenKind::Whitespace,
                TokenKind::AtKeyword,
                TokenKind::Whitespace,
                TokenKind::Function,
                TokenKind::Ident,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn punctuation_and_delim_fallback() {
        assert_eq!(
            kinds(":;{}()[]+"),
            vec![
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Delim,
            ]
        );
    }

    #[test]
    fn comments_are_consumed_silently() {
        assert_eq!(
            kinds("a/* comment */b"),
            vec![TokenKind::Ident, TokenKind::Ident]
        );
        // Unterminated comment swallows the rest of the input.
        assert_eq!(kinds("a/* trailing"), vec![TokenKind::Ident]);
    }

    #[test]
    fn decodes_string_and_uri_values() {
        let tokens = tokenize(r#""a\"b" url( 'x y.png' ) url(plain.png) rgb("#);
        assert_eq!(tokens[0].value.as_deref(), Some("a\"b"));
        assert_eq!(tokens[2].value.as_deref(), Some("x y.png"));
        assert_eq!(tokens[4].value.as_deref(), Some("plain.png"));
        assert_eq!(tokens[6].kind, TokenKind::Function);
        assert_eq!(tokens[6].value.as_deref(), Some("rgb"));
    }

    #[test]
    fn tracks_line_and_column_positions() {
        let tokens = tokenize("ab cd\n  ef");
        assert_eq!(tokens[0].span, Span::new(1, 0));
        assert_eq!(tokens[2].span, Span::new(1, 3));
        assert_eq!(tokens[4].span, Span::new(2, 2));
    }

    #[test]
    fn lexemes_concatenate_back_to_the_source() {
        let source = "a{color:red;margin:0 auto}@media print{b{x:1}}";
        let joined: String = tokenize(source)
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(joined, source);
    }
}
