/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      grouper.rs
 * Purpose:   Converts the flat token stream into a nested token tree by
 *            matching (), [], {} and function() pairs.
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

use crate::token::{ContainerToken, FunctionToken, Token, TokenKind, TokenTree};

/// Matches pairs of tokens: `()`, `[]`, `{}` and `function()`.
/// (Strings in `""` or `''` were already taken care of by the lexer.)
///
/// Opening tokens are replaced by a [`ContainerToken`] or
/// [`FunctionToken`] owning everything up to the matching closer;
/// matching closers are consumed and removed from the output entirely.
///
/// # Tolerant parsing
/// - Structures still open at the end of the input are implicitly
///   closed, with an empty stored closing marker, so malformed or
///   truncated CSS still produces a usable tree that serializes back
///   to the original text.
/// - An unmatched *closing* token with no opener in scope is invalid
///   but passed through unchanged, since no container claims it.
///
/// Recursion depth equals the nesting depth of the input.
pub fn regroup(tokens: &[Token]) -> Vec<TokenTree> {
    let mut cursor = 0;
    let (content, _closing) = group_until(tokens, &mut cursor, None);
    content
}

/// The closing kind an opening token waits for, if it opens anything.
fn closer_for(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::Function | TokenKind::LeftParen => Some(TokenKind::RightParen),
        TokenKind::LeftBracket => Some(TokenKind::RightBracket),
        TokenKind::LeftBrace => Some(TokenKind::RightBrace),
        _ => None,
    }
}

/// Collects token trees until the `stop_at` closer (or end of input).
///
/// Returns the collected content together with the literal closing
/// text that terminated it: the closer's lexeme when one was found,
/// empty when the input ran out first.
fn group_until(
    tokens: &[Token],
    cursor: &mut usize,
    stop_at: Option<TokenKind>,
) -> (Vec<TokenTree>, String) {
    let mut content = Vec::new();

    while *cursor < tokens.len() {
        let token = &tokens[*cursor];

        if stop_at == Some(token.kind) {
            let closing = token.lexeme.clone();
            *cursor += 1;
            return (content, closing);
        }

        *cursor += 1;

        match closer_for(token.kind) {
            // Not a grouping token.
            None => content.push(TokenTree::Token(token.clone())),

            Some(end) => {
                let (inner, closing) = group_until(tokens, cursor, Some(end));
                if token.kind == TokenKind::Function {
                    content.push(TokenTree::Function(FunctionToken {
                        name: token.semantic_value().to_string(),
                        opening: token.lexeme.clone(),
                        closing,
                        content: inner,
                        span: token.span,
                    }));
                } else {
                    content.push(TokenTree::Container(ContainerToken {
                        kind: token.kind,
                        opening: token.lexeme.clone(),
                        closing,
                        content: inner,
                        span: token.span,
                    }));
                }
            }
        }
    }

    // End of input: implicit close.
    (content, String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn group(source: &str) -> Vec<TokenTree> {
        regroup(&tokenize(source))
    }

    fn roundtrip(source: &str) -> String {
        group(source)
            .iter()
            .map(|tree| tree.to_css_string())
            .collect()
    }

    #[test]
    fn builds_containers_for_each_bracket_pair() {
        let trees = group("(a) [b] {c}");
        let container_kinds: Vec<TokenKind> = trees
            .iter()
            .filter(|tree| !tree.is_whitespace())
            .map(|tree| tree.kind())
            .collect();
        assert_eq!(
            container_kinds,
            vec![
                TokenKind::LeftParen,
                TokenKind::LeftBracket,
                TokenKind::LeftBrace,
            ]
        );
    }

    #[test]
    fn function_containers_carry_their_name() {
        let trees = group("rgb(0, 0, 0)");
        match &trees[0] {
            TokenTree::Function(function) => {
                assert_eq!(function.name, "rgb");
                assert_eq!(function.opening, "rgb(");
                assert_eq!(function.closing, ")");
                assert_eq!(function.content.len(), 7);
            }
            other => panic!("expected a function container, got {:?}", other),
        }
    }

    #[test]
    fn nesting_depth_is_unbounded() {
        let mut tree = group("((((a))))");
        for _ in 0..4 {
            match tree.as_slice() {
                [TokenTree::Container(container)] => {
                    assert_eq!(container.kind, TokenKind::LeftParen);
                    tree = container.content.clone();
                }
                other => panic!("expected one nested container, got {:?}", other),
            }
        }
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].kind(), TokenKind::Ident);
    }

    #[test]
    fn end_of_input_closes_implicitly() {
        let trees = group("a { color: red");
        match trees.last() {
            Some(TokenTree::Container(container)) => {
                assert_eq!(container.kind, TokenKind::LeftBrace);
                assert_eq!(container.closing, "");
                assert!(!container.content.is_empty());
            }
            other => panic!("expected a block container, got {:?}", other),
        }
    }

    #[test]
    fn unmatched_closers_pass_through() {
        let trees = group("a ) b");
        let kinds: Vec<TokenKind> = trees.iter().map(|tree| tree.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::RightParen,
                TokenKind::Whitespace,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn serialization_reproduces_the_source() {
        for source in [
            "a { color: rgb(1, 2, 3); }",
            "@media print { a[href] { x: url(a.png) } }",
            "a { color: red",
            "((((a))))",
            "a ) b ] c",
        ] {
            assert_eq!(roundtrip(source), source);
        }
    }
}
