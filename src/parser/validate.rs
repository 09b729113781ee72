/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      parser/validate.rs
 * Purpose:   Grammar-conformance validators for the generic "any" and
 *            "block" productions of the CSS core syntax.
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
use crate::token::{TokenKind, TokenTree};

/// Checks one token tree against the `any` production.
///
/// The production is permissive: every simple leaf kind passes, and
/// parenthesized, bracketed and function containers recurse into their
/// children, so arbitrary nesting is allowed as long as every leaf is
/// valid. What fails:
/// - `{` containers (only the `block` production admits those)
/// - unmatched closers that survived grouping
/// - `;` and the legacy `<!--` / `-->` markers
///
/// `context` names the enclosing production for the error message
/// (e.g. `"selector"`, `"at-rule head"`).
pub fn validate_any(tree: &TokenTree, context: &str) -> Result<(), CssError> {
    match tree {
        TokenTree::Function(function) => {
            for child in &function.content {
                validate_any(child, context)?;
            }
            Ok(())
        }

        TokenTree::Container(container)
            if matches!(container.kind, TokenKind::LeftParen | TokenKind::LeftBracket) =>
        {
            for child in &container.content {
                validate_any(child, context)?;
            }
            Ok(())
        }

        TokenTree::Container(container) => Err(CssError::unexpected_token(
            container.kind,
            container.span,
            context,
        )),

        TokenTree::Token(token) => match token.kind {
            TokenKind::Whitespace
            | TokenKind::Ident
            | TokenKind::Dimension
            | TokenKind::Percentage
            | TokenKind::Number
            | TokenKind::Uri
            | TokenKind::Delim
            | TokenKind::String
            | TokenKind::Hash
            | TokenKind::AtKeyword
            | TokenKind::Colon
            | TokenKind::UnicodeRange
            | TokenKind::Includes
            | TokenKind::DashMatch => Ok(()),

            _ => Err(CssError::unexpected_token(token.kind, token.span, context)),
        },
    }
}

/// Checks the children of a `{` container against the `block`
/// production.
///
/// More permissive than [`validate_any`], by design: `;` and
/// at-keywords pass unconditionally at this level, so a value may
/// carry a block embedding at-rules or declarations the parser does
/// not understand. Nested `{` containers recurse as blocks; everything
/// else must satisfy `any`.
pub fn validate_block(content: &[TokenTree], context: &str) -> Result<(), CssError> {
    for tree in content {
        match tree {
            TokenTree::Container(container) if container.kind == TokenKind::LeftBrace => {
                validate_block(&container.content, context)?;
            }

            TokenTree::Token(token)
                if matches!(token.kind, TokenKind::Semicolon | TokenKind::AtKeyword) => {}

            other => validate_any(other, context)?,
        }
    }
    Ok(())
}
