/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   The recoverable parse error type and its recovery
 *            granularity tag.
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

use crate::span::Span;
use crate::token::TokenKind;
use serde::Serialize;
use std::fmt;

/// How much of the surrounding grammar an error discards.
///
/// Every CLAWCSS error is recoverable at some granularity; the parser
/// never aborts outright. The tag tells callers which unit to drop when
/// they choose to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recovery {
    /// The whole statement (at-rule or ruleset) is discarded.
    Statement,

    /// Only the current declaration is discarded; the enclosing
    /// ruleset and sibling declarations are unaffected.
    Declaration,
}

/// A recoverable CSS parse error.
#[derive(Debug, Clone, Serialize)]
pub struct CssError {
    /// Stable error code (E_UNEXPECTED_TOKEN, E_UNEXPECTED_EOF, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// The kind of the offending token, when one exists. `None` for
    /// end-of-input errors.
    pub token: Option<TokenKind>,

    /// Optional note / help text
    pub help: Option<String>,

    /// Recovery granularity: statement-fatal or declaration-fatal.
    pub recovery: Recovery,
}

impl CssError {
    /// Generic constructor. Errors start statement-fatal; declaration
    /// parsing downgrades them with [`declaration_level`](Self::declaration_level).
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            token: None,
            help: None,
            recovery: Recovery::Statement,
        }
    }

    /// A token of the wrong kind was found.
    pub fn unexpected_token(
        kind: TokenKind,
        span: Span,
        context: &str,
    ) -> Self {
        let mut error = Self::new(
            "E_UNEXPECTED_TOKEN",
            format!("unexpected {} token in {}", kind, context),
            span,
        );
        error.token = Some(kind);
        error
    }

    /// The token stream ran out in the middle of a grammatical unit.
    pub fn unexpected_end(context: &str, span: Span) -> Self {
        Self::new(
            "E_UNEXPECTED_EOF",
            format!("unexpected end of {}", context),
            span,
        )
    }

    /// A declaration never reached its `:` separator.
    pub fn missing_colon(span: Span) -> Self {
        Self::new("E_MISSING_COLON", "expected ':'", span)
            .with_help("A declaration is written 'property: value'.")
    }

    /// A declaration carried no value tokens after its `:`.
    pub fn empty_value(span: Span) -> Self {
        Self::new("E_EMPTY_VALUE", "expected a property value", span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Downgrade the error to declaration granularity (builder-style).
    pub fn declaration_level(mut self) -> Self {
        self.recovery = Recovery::Declaration;
        self
    }

    /// Returns true when recovering from this error discards a whole
    /// statement.
    pub fn is_statement_fatal(&self) -> bool {
        self.recovery == Recovery::Statement
    }
}

impl fmt::Display for CssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at {}: {}",
            self.span, self.message
        )
    }
}

impl std::error::Error for CssError {}
