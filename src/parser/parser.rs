/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      parser/parser.rs
 * Purpose:   The core recursive-descent parser driver: owns the token
 *            tree cursor and the top-level stylesheet loop.
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

use crate::ast::{Rule, Stylesheet};
use crate::token::{TokenKind, TokenTree};

/// The core CLAWCSS recursive-descent parser.
///
/// This structure maintains:
/// - The grouped token tree stream produced by the grouper
/// - The current cursor position into that stream
///
/// The statement-level grammar is implemented through an extension
/// module (`statements`) via an additional `impl Parser` block; the
/// declaration-level grammar lives in free functions since it operates
/// on already-grouped block content.
pub struct Parser {
    /// Complete list of token trees to be parsed.
    pub trees: Vec<TokenTree>,

    /// Current cursor position within the stream.
    pub current: usize,
}

/// Public entry point for the parsing phase.
///
/// This function:
/// 1. Creates a new `Parser` instance over the grouped token trees
/// 2. Runs the top-level stylesheet loop
/// 3. Returns the parsed rules together with every recovered error
///
/// It never fails: errors discard only their enclosing statement or
/// declaration and are collected into the result.
///
/// # Example
/// ```
/// use clawcss::{grouper, lexer, parser};
///
/// let trees = grouper::regroup(&lexer::tokenize("a { color: red }"));
/// let stylesheet = parser::parse_stylesheet(trees);
/// assert_eq!(stylesheet.rules.len(), 1);
/// assert!(stylesheet.errors.is_empty());
/// ```
pub fn parse_stylesheet(trees: Vec<TokenTree>) -> Stylesheet {
    let mut parser = Parser::new(trees);
    parser.stylesheet()
}

impl Parser {
    pub fn new(trees: Vec<TokenTree>) -> Self {
        Self { trees, current: 0 }
    }

    /// Parses the entire stream into a stylesheet.
    ///
    /// This is the **main driver** of the recursive-descent parser. For
    /// each top-level token it:
    /// - Skips white space and the legacy `<!--` / `-->` markers
    /// - Dispatches an at-keyword to the at-rule parser
    /// - Dispatches anything else to the ruleset parser
    ///
    /// # Recovery
    /// A statement-fatal error from either delegate is recorded and
    /// discards only that one statement; parsing resumes from the next
    /// top-level token. Declaration-level errors recovered inside a
    /// ruleset are carried through into the error list while the
    /// ruleset itself is kept.
    pub fn stylesheet(&mut self) -> Stylesheet {
        let mut rules = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            let tree = self.advance();

            match tree {
                tree if matches!(
                    tree.kind(),
                    TokenKind::Whitespace | TokenKind::Cdo | TokenKind::Cdc
                ) =>
                {
                    continue;
                }

                TokenTree::Token(token) if token.kind == TokenKind::AtKeyword => {
                    match self.at_rule(token) {
                        Ok(at_rule) => rules.push(Rule::AtRule(at_rule)),
                        // Skip the entire rule.
                        Err(error) => errors.push(error),
                    }
                }

                tree => match self.ruleset(tree) {
                    Ok((ruleset, declaration_errors)) => {
                        rules.push(Rule::Ruleset(ruleset));
                        errors.extend(declaration_errors);
                    }
                    // Skip the entire rule.
                    Err(error) => errors.push(error),
                },
            }
        }

        Stylesheet { rules, errors }
    }

    /// Advances one token tree forward.
    pub fn advance(&mut self) -> TokenTree {
        let tree = self.trees[self.current].clone();
        self.current += 1;
        tree
    }

    /// Peeks at the current token tree without advancing.
    pub fn peek(&self) -> Option<&TokenTree> {
        self.trees.get(self.current)
    }

    /// Returns true once the cursor has consumed every tree.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.trees.len()
    }
}
