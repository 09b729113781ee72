/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root: wires the pipeline stages together and exposes
 *            the one-call `parse(source)` convenience entry point.
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

//! CLAWCSS parses CSS at the *core syntax* level: the grammar governing
//! tokenization and block/statement structure, independent of any
//! specific property or selector semantics.
//!
//! # Pipeline
//! ```text
//! Source Text → Lexer → Tokens → Grouper → Token Trees → Parser → Stylesheet
//! ```
//!
//! Parsing is tolerant: malformed input never aborts the parse. Errors
//! discard only their smallest enclosing grammatical unit (a statement
//! or a single declaration) and are collected alongside the rules.
//!
//! # Example
//! ```
//! let stylesheet = clawcss::parse("a { color: red; margin 0 }");
//! assert_eq!(stylesheet.rules.len(), 1);
//! assert_eq!(stylesheet.errors.len(), 1);
//! ```

/// The structured parse result: stylesheets, rules and declarations.
pub mod ast;

/// Rustc-style diagnostic rendering for parse errors.
pub mod diagnostics;

/// The recoverable parse error type and its recovery granularity tag.
pub mod error;

/// Bracket/parenthesis/function-call matching over the flat token
/// stream.
pub mod grouper;

/// Source text → flat token stream.
pub mod lexer;

/// The recursive-descent core grammar parser.
pub mod parser;

/// Source positions.
pub mod span;

/// The lexical token model: flat tokens and grouped token trees.
pub mod token;

pub use ast::{AtRule, Declaration, Rule, Ruleset, Stylesheet};
pub use error::{CssError, Recovery};
pub use span::Span;
pub use token::{ContainerToken, FunctionToken, Token, TokenKind, TokenTree};

/// Parses CSS source text into a stylesheet in one call.
///
/// Equivalent to tokenizing, grouping and running the stylesheet
/// parser. For callers that already hold a token stream (or a grammar
/// fragment), the staged entry points in [`lexer`], [`grouper`] and
/// [`parser`] compose the same way.
pub fn parse(source: &str) -> Stylesheet {
    parser::parse_stylesheet(grouper::regroup(&lexer::tokenize(source)))
}
