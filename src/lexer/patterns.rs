/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      lexer/patterns.rs
 * Purpose:   The regular-expression pattern tables driving the CLAWCSS
 *            lexer, written as the macro/token grammar of the CSS core
 *            syntax specification.
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

use crate::token::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// Named sub-patterns ("macros") of the core syntax tokenization
/// grammar. Later entries may reference earlier ones as `{name}`;
/// references are expanded before compilation.
const MACROS: &[(&str, &str)] = &[
    ("nl", r"\n|\r\n|\r|\x0c"),
    ("w", r"[ \t\r\n\x0c]*"),
    ("nonascii", r"[^\x00-\x9f]"),
    ("unicode", r"\\[0-9a-f]{1,6}(\r\n|[ \n\r\t\x0c])?"),
    ("simple_escape", r"\\[^\n\r\x0c0-9a-f]"),
    ("escape", r"{unicode}|{simple_escape}"),
    ("nmstart", r"[_a-z]|{nonascii}|{escape}"),
    ("nmchar", r"[_a-z0-9-]|{nonascii}|{escape}"),
    ("name", r"{nmchar}+"),
    ("ident", r"[-]?{nmstart}{nmchar}*"),
    ("num", r"[0-9]*\.[0-9]+|[0-9]+"),
    ("string1", r#""([^\n\r\x0c\\"]|\\{nl}|{escape})*""#),
    ("string2", r"'([^\n\r\x0c\\']|\\{nl}|{escape})*'"),
    ("string", r"{string1}|{string2}"),
    ("urlchar", r"[!#$%&*-~]|{nonascii}|{escape}"),
];

/// The token patterns, one per multi-character token kind, in match
/// priority order. At each source position the lexer tries these in
/// sequence and takes the first match; single-character punctuation
/// and the `Delim` catch-all are handled separately by the lexer.
///
/// Priority matters: `url(` must win over a function token, `u+...`
/// over an identifier, and `12px` over a plain number.
const TOKEN_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::Whitespace, r"[ \t\r\n\x0c]+"),
    (TokenKind::Uri, r"url\({w}({string}|({urlchar})*){w}\)"),
    (TokenKind::Function, r"{ident}\("),
    (TokenKind::UnicodeRange, r"u\+[0-9a-f?]{1,6}(-[0-9a-f]{1,6})?"),
    (TokenKind::Ident, r"{ident}"),
    (TokenKind::AtKeyword, r"@{ident}"),
    (TokenKind::Hash, r"#{name}"),
    (TokenKind::Dimension, r"{num}{ident}"),
    (TokenKind::Percentage, r"{num}%"),
    (TokenKind::Number, r"{num}"),
    (TokenKind::String, r"{string}"),
    (TokenKind::Cdo, r"<!--"),
    (TokenKind::Cdc, r"-->"),
    (TokenKind::Includes, r"~="),
    (TokenKind::DashMatch, r"\|="),
];

/// Expands `{name}` macro references into non-capturing groups.
///
/// Macros are processed in declaration order, so each body may only
/// reference macros declared before it. Literal regex repetitions such
/// as `{1,6}` never collide with macro names and pass through.
fn expand_macros(pattern: &str, expanded: &[(&str, String)]) -> String {
    let mut result = pattern.to_string();
    for (name, body) in expanded {
        let reference = format!("{{{}}}", name);
        if result.contains(&reference) {
            result = result.replace(&reference, &format!("(?:{})", body));
        }
    }
    result
}

/// The compiled token pattern table, shared by every lexer instance.
///
/// Compiled exactly once into an immutable table; the lexer stays fully
/// reentrant and safe to run concurrently on independent inputs.
pub(crate) fn token_patterns() -> &'static [(TokenKind, Regex)] {
    static TABLE: OnceLock<Vec<(TokenKind, Regex)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut expanded: Vec<(&str, String)> = Vec::new();
        for (name, body) in MACROS {
            let full = expand_macros(body, &expanded);
            expanded.push((name, full));
        }

        TOKEN_PATTERNS
            .iter()
            .map(|(kind, pattern)| {
                let full = expand_macros(pattern, &expanded);
                // Anchored at the current scan position, ASCII
                // case-insensitive like the core grammar.
                let compiled = Regex::new(&format!("(?i)^(?:{})", full))
                    .expect("token pattern table");
                (*kind, compiled)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_len(kind: TokenKind, input: &str) -> Option<usize> {
        token_patterns()
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, pattern)| pattern.find(input))
            .map(|m| m.end())
    }

    #[test]
    fn patterns_anchor_at_start() {
        assert_eq!(match_len(TokenKind::Number, "12 "), Some(2));
        assert_eq!(match_len(TokenKind::Number, " 12"), None);
    }

    #[test]
    fn ident_covers_escapes_and_case() {
        assert_eq!(match_len(TokenKind::Ident, "color"), Some(5));
        assert_eq!(match_len(TokenKind::Ident, "-moz-box"), Some(8));
        assert_eq!(match_len(TokenKind::Ident, "COLOR"), Some(5));
        assert_eq!(match_len(TokenKind::Ident, r"\26 b"), Some(5));
        assert_eq!(match_len(TokenKind::Ident, "12px"), None);
    }

    #[test]
    fn uri_beats_function() {
        assert_eq!(match_len(TokenKind::Uri, "url( 'a b.png' )"), Some(16));
        assert_eq!(match_len(TokenKind::Uri, "url(a.png)"), Some(10));
        // An unterminated url( falls through to the function pattern.
        assert_eq!(match_len(TokenKind::Uri, "url(a.png"), None);
        assert_eq!(match_len(TokenKind::Function, "url(a.png"), Some(4));
    }

    #[test]
    fn numeric_pattern_shapes() {
        assert_eq!(match_len(TokenKind::Dimension, "1.5em"), Some(5));
        assert_eq!(match_len(TokenKind::Percentage, "50%"), Some(3));
        assert_eq!(match_len(TokenKind::Number, ".5"), Some(2));
    }
}
