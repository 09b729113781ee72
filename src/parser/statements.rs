/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      parser/statements.rs
 * Purpose:   Statement-level parsing: at-rules and rulesets.
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

use crate::ast::{AtRule, Ruleset};
use crate::error::CssError;
use crate::parser::declarations::parse_declaration_list;
use crate::parser::parser::Parser;
use crate::parser::validate::validate_any;
use crate::token::{ContainerToken, Token, TokenKind, TokenTree};

impl Parser {
    /// Parses one at-rule, starting from its already-consumed
    /// at-keyword token.
    ///
    /// The keyword is ASCII-lower-cased (CSS syntax is
    /// case-insensitive). Head tokens are consumed up to a top-level
    /// `;` or `{` block; the white space run immediately after the
    /// keyword is dropped, interior head white space is preserved.
    ///
    /// # Validation
    /// Every head token must satisfy the `any` production; a single
    /// invalid head token fails the *entire* at-rule. The body block
    /// is **not** validated: it might contain declarations, and an
    /// error in one declaration should not discard the whole rule.
    /// Profile parsers are expected to parse (or ignore) at-rule
    /// bodies themselves.
    ///
    /// # Errors
    /// Statement-fatal: an invalid head token, or the stream running
    /// out before any terminator is reached.
    pub fn at_rule(&mut self, at_keyword: Token) -> Result<AtRule, CssError> {
        let keyword = at_keyword.semantic_value().to_ascii_lowercase();
        let mut head: Vec<TokenTree> = Vec::new();

        while !self.is_at_end() {
            let tree = self.advance();

            let body = match tree {
                TokenTree::Token(ref token) if token.kind == TokenKind::Semicolon => None,
                TokenTree::Container(container)
                    if container.kind == TokenKind::LeftBrace =>
                {
                    Some(container)
                }

                // Ignore white space just after the at-keyword, but
                // keep it afterwards.
                tree if head.is_empty() && tree.is_whitespace() => continue,
                tree => {
                    head.push(tree);
                    continue;
                }
            };

            for head_tree in &head {
                validate_any(head_tree, "at-rule head")?;
            }
            return Ok(AtRule {
                keyword,
                head,
                body,
                span: at_keyword.span,
            });
        }

        Err(CssError::unexpected_end("at-rule", at_keyword.span))
    }

    /// Parses one ruleset, starting from its already-consumed first
    /// selector token.
    ///
    /// Selector tokens accumulate until a `{` block container is
    /// found; the block's content becomes the declaration list. The
    /// raw selector tokens are wrapped in a synthetic container whose
    /// position is the first selector token's (or the block's, when
    /// the selector is empty).
    ///
    /// # Validation
    /// Every selector token must satisfy the `any` production; a
    /// single invalid token fails the whole ruleset. Selector validity
    /// is all-or-nothing, unlike declarations, which recover
    /// individually via [`parse_declaration_list`].
    ///
    /// # Errors
    /// Statement-fatal: an invalid selector token, or the stream
    /// running out before a block is found.
    pub fn ruleset(
        &mut self,
        first: TokenTree,
    ) -> Result<(Ruleset, Vec<CssError>), CssError> {
        let mut selector_parts: Vec<TokenTree> = Vec::new();
        let mut next = Some(first);

        while let Some(tree) = next {
            match tree {
                TokenTree::Container(block) if block.kind == TokenKind::LeftBrace => {
                    // Validate once the whole selector has been read.
                    for selector_tree in &selector_parts {
                        validate_any(selector_tree, "selector")?;
                    }

                    let span = selector_parts
                        .first()
                        .map(|tree| tree.span())
                        .unwrap_or(block.span);
                    let selector = ContainerToken {
                        kind: TokenKind::Selector,
                        opening: String::new(),
                        closing: String::new(),
                        content: selector_parts,
                        span,
                    };

                    let (declarations, errors) =
                        parse_declaration_list(&block.content);
                    return Ok((
                        Ruleset {
                            selector,
                            declarations,
                            span,
                        },
                        errors,
                    ));
                }

                tree => selector_parts.push(tree),
            }

            next = if self.is_at_end() {
                None
            } else {
                Some(self.advance())
            };
        }

        let span = selector_parts
            .first()
            .map(|tree| tree.span())
            .unwrap_or_default();
        Err(CssError::unexpected_end("ruleset", span))
    }
}

/// Parses a grammar fragment known to be a single at-rule.
///
/// For callers that have an at-rule outside the full stylesheet
/// context. Leading white space is skipped; the first remaining tree
/// must be an at-keyword.
pub fn parse_at_rule(trees: Vec<TokenTree>) -> Result<AtRule, CssError> {
    let mut parser = Parser::new(trees);

    while !parser.is_at_end() {
        let tree = parser.advance();
        if tree.is_whitespace() {
            continue;
        }
        return match tree {
            TokenTree::Token(token) if token.kind == TokenKind::AtKeyword => {
                parser.at_rule(token)
            }
            other => Err(CssError::unexpected_token(
                other.kind(),
                other.span(),
                "at-rule",
            )),
        };
    }

    Err(CssError::unexpected_end("at-rule", Default::default()))
}

/// Parses a grammar fragment known to be a single ruleset.
///
/// For callers that have a ruleset outside the full stylesheet
/// context. Leading white space is skipped. Returns the ruleset
/// together with its recovered declaration-level errors.
pub fn parse_ruleset(
    trees: Vec<TokenTree>,
) -> Result<(Ruleset, Vec<CssError>), CssError> {
    let mut parser = Parser::new(trees);

    while !parser.is_at_end() {
        let tree = parser.advance();
        if tree.is_whitespace() {
            continue;
        }
        return parser.ruleset(tree);
    }

    Err(CssError::unexpected_end("ruleset", Default::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::regroup;
    use crate::lexer::tokenize;

    fn trees(source: &str) -> Vec<TokenTree> {
        regroup(&tokenize(source))
    }

    #[test]
    fn at_rule_with_a_semicolon_has_no_body() {
        let at_rule = parse_at_rule(trees("@import \"x.css\";")).unwrap();
        assert_eq!(at_rule.keyword, "@import");
        assert_eq!(at_rule.head.len(), 1);
        assert_eq!(at_rule.head[0].kind(), TokenKind::String);
        assert!(at_rule.body.is_none());
    }

    #[test]
    fn at_rule_keyword_folds_to_lower_case() {
        let at_rule = parse_at_rule(trees("@IMPORT \"X.css\";")).unwrap();
        assert_eq!(at_rule.keyword, "@import");
        // The string value keeps its original letter case.
        match &at_rule.head[0] {
            TokenTree::Token(token) => {
                assert_eq!(token.semantic_value(), "X.css");
            }
            other => panic!("expected a string token, got {:?}", other),
        }
    }

    #[test]
    fn at_rule_head_drops_only_leading_whitespace() {
        let at_rule = parse_at_rule(trees("@media  screen and (color) {}")).unwrap();
        assert_eq!(at_rule.keyword, "@media");
        assert!(!at_rule.head[0].is_whitespace());
        let head_css: String = at_rule
            .head
            .iter()
            .map(|tree| tree.to_css_string())
            .collect();
        assert_eq!(head_css, "screen and (color) ");
        assert!(at_rule.body.is_some());
    }

    #[test]
    fn at_rule_head_is_all_or_nothing() {
        let error = parse_at_rule(trees("@media scr}een { }")).unwrap_err();
        assert_eq!(error.code, "E_UNEXPECTED_TOKEN");
        assert!(error.is_statement_fatal());
    }

    #[test]
    fn at_rule_without_a_terminator_is_an_error() {
        let error = parse_at_rule(trees("@charset \"utf-8\"")).unwrap_err();
        assert_eq!(error.code, "E_UNEXPECTED_EOF");
    }

    #[test]
    fn ruleset_wraps_its_selector_tokens() {
        let (ruleset, errors) =
            parse_ruleset(trees("a > b.c { color: red }")).unwrap();
        assert!(errors.is_empty());
        assert_eq!(ruleset.selector.kind, TokenKind::Selector);
        assert_eq!(ruleset.selector.to_css_string(), "a > b.c ");
        assert_eq!(ruleset.declarations.len(), 1);
        assert_eq!(ruleset.declarations[0].property, "color");
    }

    #[test]
    fn ruleset_selector_is_all_or_nothing() {
        let error = parse_ruleset(trees("a ; b { color: red }")).unwrap_err();
        assert_eq!(error.code, "E_UNEXPECTED_TOKEN");
        assert_eq!(error.token, Some(TokenKind::Semicolon));
        assert!(error.is_statement_fatal());
    }

    #[test]
    fn ruleset_with_an_empty_selector_uses_the_block_position() {
        let (ruleset, _) = parse_ruleset(trees("{ a: 1 }")).unwrap();
        assert!(ruleset.selector.content.is_empty());
        assert_eq!(ruleset.span.line, 1);
        assert_eq!(ruleset.declarations.len(), 1);
    }

    #[test]
    fn ruleset_without_a_block_is_an_error() {
        let error = parse_ruleset(trees("a > b")).unwrap_err();
        assert_eq!(error.code, "E_UNEXPECTED_EOF");
    }
}
