/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      parser/declarations.rs
 * Purpose:   Parses declaration lists, single declarations and property
 *            values out of grouped block content.
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

use crate::ast::Declaration;
use crate::error::CssError;
use crate::parser::validate::{validate_any, validate_block};
use crate::token::{TokenKind, TokenTree};

/// Parses a `;`-separated declaration list.
///
/// `content` is the grouped content of a block: tokens inside nested
/// containers were already absorbed by the grouper, so splitting on the
/// `;` tokens seen here needs no bracket-depth tracking.
///
/// # Recovery
/// Declarations are fully isolated from each other: a part that fails
/// to parse is recorded as a declaration-level error and parsing
/// continues with the next part. A part with zero tokens (consecutive
/// `;`, or leading/trailing `;`) is silently skipped, not an error.
///
/// If you have a block that contains declarations but not only
/// (like `@page` in CSS 3 Paged Media), extract them yourself and use
/// [`parse_declaration`] directly.
pub fn parse_declaration_list(
    content: &[TokenTree],
) -> (Vec<Declaration>, Vec<CssError>) {
    // Split at ';', dropping white space at the start of each part.
    let mut parts: Vec<Vec<TokenTree>> = Vec::new();
    let mut this_part: Vec<TokenTree> = Vec::new();
    for tree in content {
        if tree.kind() == TokenKind::Semicolon {
            parts.push(std::mem::take(&mut this_part));
        } else if !this_part.is_empty() || !tree.is_whitespace() {
            this_part.push(tree.clone());
        }
    }
    parts.push(this_part);

    let mut declarations = Vec::new();
    let mut errors = Vec::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        match parse_declaration(&part) {
            Ok(declaration) => declarations.push(declaration),
            // Skip the entire declaration, keep its siblings.
            Err(error) => errors.push(error),
        }
    }
    (declarations, errors)
}

/// Parses a single `property : value` declaration.
///
/// `part` holds the tokens of exactly one declaration, stopping at
/// (before) the terminating `;` or the end of the block.
///
/// # Grammar
/// - The first non-white-space token must be an identifier; it becomes
///   the property name, ASCII-lower-cased (CSS syntax is
///   case-insensitive there)
/// - White space is skipped up to the `:`; any other token before it
///   fails, as does running out of tokens
/// - The remainder is parsed with [`parse_value`] and must be non-empty
///
/// All errors are declaration-level: callers recover by dropping only
/// this declaration.
pub fn parse_declaration(part: &[TokenTree]) -> Result<Declaration, CssError> {
    let mut index = 0;

    while index < part.len() && part[index].is_whitespace() {
        index += 1;
    }

    // ------------------------------------------------------------
    // PROPERTY NAME
    // ------------------------------------------------------------
    let (property, span) = match part.get(index) {
        Some(TokenTree::Token(token)) if token.kind == TokenKind::Ident => (
            token.semantic_value().to_ascii_lowercase(),
            token.span,
        ),
        Some(other) => {
            return Err(CssError::unexpected_token(
                other.kind(),
                other.span(),
                "declaration",
            )
            .with_help("Expected a property name.")
            .declaration_level());
        }
        None => {
            return Err(CssError::unexpected_end(
                "declaration",
                Default::default(),
            )
            .declaration_level());
        }
    };
    index += 1;

    // ------------------------------------------------------------
    // THE ':' SEPARATOR
    // ------------------------------------------------------------
    loop {
        match part.get(index) {
            Some(tree) if tree.kind() == TokenKind::Colon => {
                index += 1;
                break;
            }
            Some(tree) if tree.is_whitespace() => index += 1,
            Some(other) => {
                return Err(CssError::unexpected_token(
                    other.kind(),
                    other.span(),
                    "declaration",
                )
                .with_help("Expected ':' after the property name.")
                .declaration_level());
            }
            None => return Err(CssError::missing_colon(span).declaration_level()),
        }
    }

    // ------------------------------------------------------------
    // VALUE
    // ------------------------------------------------------------
    let value = parse_value(&part[index..])?;
    if value.is_empty() {
        return Err(CssError::empty_value(span).declaration_level());
    }

    Ok(Declaration {
        property,
        value,
        span,
    })
}

/// Parses a property value and returns its token list.
///
/// Only the *leading* run of white space is dropped while scanning;
/// interior white space is preserved so multi-token values such as
/// `0 auto` stay distinguishable. After the scan the trailing run of
/// white space is removed once — white space may appear, be followed
/// by more content and reappear, and only the final run counts as
/// trailing.
///
/// Every token must satisfy the `any` production, except a `{`
/// container, which must satisfy `block` instead: the core grammar
/// allows curly-brace blocks inside values for forward compatibility
/// with constructs this parser does not understand.
pub fn parse_value(trees: &[TokenTree]) -> Result<Vec<TokenTree>, CssError> {
    let mut content: Vec<TokenTree> = Vec::new();

    for tree in trees {
        // Skip white space at the start.
        if content.is_empty() && tree.is_whitespace() {
            continue;
        }

        match tree {
            TokenTree::Container(container) if container.kind == TokenKind::LeftBrace => {
                validate_block(&container.content, "property value")
                    .map_err(CssError::declaration_level)?;
            }
            other => {
                validate_any(other, "property value")
                    .map_err(CssError::declaration_level)?;
            }
        }
        content.push(tree.clone());
    }

    // Remove white space at the end.
    while content.last().is_some_and(|tree| tree.is_whitespace()) {
        content.pop();
    }

    Ok(content)
}
