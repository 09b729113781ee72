/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      ast.rs
 * Purpose:   The structured parse result: stylesheets, at-rules,
 *            rulesets and declarations.
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

use crate::error::CssError;
use crate::span::Span;
use crate::token::{ContainerToken, TokenTree};
use serde::Serialize;

/// A top-level statement of a stylesheet.
///
/// The core grammar knows exactly two statement shapes; what a specific
/// at-keyword or selector *means* is left to CSS-profile interpreters
/// built on top of this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Rule {
    /// An `@keyword head... ;` or `@keyword head... { body }` statement.
    AtRule(AtRule),

    /// A `selector { declarations }` statement.
    Ruleset(Ruleset),
}

/// An at-rule statement.
///
/// The head and body are *not* validated against any specific CSS
/// profile: `@media`, `@page` and unknown at-rules all come out of the
/// core parser in this same raw shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRule {
    /// The at-keyword, ASCII-lower-cased, including the `@`
    /// (e.g. `@import`).
    pub keyword: String,

    /// The tokens between the keyword and the terminator, with the
    /// white space run just after the keyword removed.
    pub head: Vec<TokenTree>,

    /// The raw `{ ... }` block, or `None` when the rule was terminated
    /// by `;`. The body content is left unvalidated so profile parsers
    /// can recover per-declaration inside it.
    pub body: Option<ContainerToken>,

    /// Where the at-keyword starts in the source.
    pub span: Span,
}

/// A ruleset: a selector followed by a declaration block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ruleset {
    /// The raw selector tokens, wrapped in a synthetic container with
    /// empty opening/closing markers. Selector *semantics* belong to
    /// higher CSS levels.
    pub selector: ContainerToken,

    /// The declarations of the block, in source order. Declarations
    /// that failed to parse are dropped here and reported as errors.
    pub declarations: Vec<Declaration>,

    /// Where the ruleset starts in the source.
    pub span: Span,
}

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// The property name, ASCII-lower-cased.
    pub property: String,

    /// The value tokens with leading and trailing white space removed.
    /// Interior white space is preserved so multi-token values stay
    /// distinguishable.
    pub value: Vec<TokenTree>,

    /// Where the property name starts in the source.
    pub span: Span,
}

impl Declaration {
    /// Serializes the value tokens back into CSS text.
    pub fn value_css(&self) -> String {
        let mut out = String::new();
        for tree in &self.value {
            tree.write_css(&mut out);
        }
        out
    }
}

/// The complete result of parsing a stylesheet.
///
/// Rules and errors are independent lists: an error drops exactly the
/// smallest enclosing grammatical unit, never the whole parse, so both
/// lists are always populated on a best-effort basis.
#[derive(Debug, Clone, Serialize)]
pub struct Stylesheet {
    /// The successfully parsed statements, in source order.
    pub rules: Vec<Rule>,

    /// Every recovered parse error, in source order, tagged with its
    /// recovery granularity.
    pub errors: Vec<CssError>,
}

impl Stylesheet {
    /// Serializes the parse result to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("stylesheet serialization")
    }

    /// Serializes the parse result to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("stylesheet serialization")
    }
}
