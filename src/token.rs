/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the
 *            CLAWCSS parser: the flat tokens produced by the lexer and
 *            the nested token trees produced by the grouper.
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
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the CSS core syntax.
///
/// `TokenKind` identifies how a run of source characters should be
/// interpreted by the parser, following the tokenization level of the
/// core grammar:
///
/// ```text
/// Source Text → Lexer → TokenKind → Grouper → Parser → Stylesheet
/// ```
///
/// The vocabulary is fixed: higher CSS levels (2.1, Paged Media, ...)
/// assign meaning to these tokens but never add new kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// An identifier such as `color` or `-moz-box`.
    Ident,

    /// An `@`-prefixed keyword starting an at-rule, e.g. `@import`.
    AtKeyword,

    /// A quoted string literal, single or double quoted.
    String,

    /// A `#`-prefixed name, e.g. `#fff` or `#nav`.
    Hash,

    /// An integer or decimal number, e.g. `12` or `1.5`.
    Number,

    /// A number immediately followed by `%`, e.g. `50%`.
    Percentage,

    /// A number immediately followed by an identifier unit, e.g. `12px`.
    Dimension,

    /// A `url(...)` literal, quoted or unquoted.
    Uri,

    /// A unicode range, e.g. `u+0a-ff` or `u+26??`.
    UnicodeRange,

    /// The `~=` includes-match operator.
    Includes,

    /// The `|=` dash-match operator.
    DashMatch,

    /// Any other single character, e.g. `+`, `>`, `,` or `!`.
    Delim,

    /// A run of white space characters.
    Whitespace,

    /// The `:` punctuation separating a property from its value.
    Colon,

    /// The `;` punctuation terminating declarations and at-rules.
    Semicolon,

    /// The `{` opening a block. After grouping this kind tags the
    /// whole block container.
    LeftBrace,

    /// The `}` closing a block. Survives grouping only when unmatched.
    RightBrace,

    /// The `(` opening a parenthesized group.
    LeftParen,

    /// The `)` closing a parenthesized group or function call.
    /// Survives grouping only when unmatched.
    RightParen,

    /// The `[` opening a bracketed group.
    LeftBracket,

    /// The `]` closing a bracketed group. Survives grouping only
    /// when unmatched.
    RightBracket,

    /// An identifier immediately followed by `(`, starting a function
    /// call. After grouping this kind tags the function container.
    Function,

    /// The legacy SGML comment opener `<!--`.
    Cdo,

    /// The legacy SGML comment closer `-->`.
    Cdc,

    /// Synthetic kind for the selector wrapper container built by the
    /// ruleset parser. Never produced by the lexer.
    Selector,
}

impl TokenKind {
    /// Grammar-facing name of this kind, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::AtKeyword => "at-keyword",
            TokenKind::String => "string",
            TokenKind::Hash => "hash",
            TokenKind::Number => "number",
            TokenKind::Percentage => "percentage",
            TokenKind::Dimension => "dimension",
            TokenKind::Uri => "URI",
            TokenKind::UnicodeRange => "unicode-range",
            TokenKind::Includes => "'~='",
            TokenKind::DashMatch => "'|='",
            TokenKind::Delim => "delimiter",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Function => "function",
            TokenKind::Cdo => "'<!--'",
            TokenKind::Cdc => "'-->'",
            TokenKind::Selector => "selector",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a **single lexical token** produced by the CLAWCSS lexer.
///
/// A `Token` is a fully classified unit of source text consisting of:
/// - A token category (`TokenKind`)
/// - The exact source text (`lexeme`)
/// - An optional decoded semantic value
/// - The source position for error reporting
///
/// # Example Tokens
/// ```text
/// color    →  { kind: Ident,     lexeme: "color",     value: None }
/// "x.css"  →  { kind: String,    lexeme: "\"x.css\"", value: Some("x.css") }
/// 12px     →  { kind: Dimension, lexeme: "12px",      value: None }
/// ```
///
/// Tokens never mutate after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Preserved verbatim so that serializing a token tree reproduces
    /// the original source byte-for-byte.
    pub lexeme: String,

    /// The decoded semantic value, where it differs from the lexeme.
    ///
    /// - `String` → the text between the quotes, with escapes decoded
    /// - `Uri` → the text inside `url(...)`, unquoted and unescaped
    /// - `Function` → the function name without the `(`
    ///
    /// `None` means the value is the lexeme itself.
    pub value: Option<String>,

    /// Where this token starts in the source.
    pub span: Span,
}

impl Token {
    /// The semantic value of this token: the decoded value when one was
    /// stored, the raw lexeme otherwise.
    pub fn semantic_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.lexeme)
    }
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme, keeping error messages about
    /// *what the user wrote* rather than internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// A node of the grouped token tree.
///
/// The grouper replaces every opening bracket, parenthesis and function
/// call with a container owning everything up to its matching closer, so
/// the parser only ever sees well-nested structure. The three variants
/// are closed: there is no other shape of node, and "is this container a
/// function call" is an exhaustive `match`, not a runtime type test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenTree {
    /// A leaf token, unchanged from the lexer output.
    Token(Token),

    /// A `(`, `[` or `{` container with its grouped content.
    Container(ContainerToken),

    /// A `name(` function-call container with its grouped content.
    Function(FunctionToken),
}

impl TokenTree {
    /// The lexical kind of this node. Containers report the kind of
    /// their opening token; function containers report `Function`.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenTree::Token(token) => token.kind,
            TokenTree::Container(container) => container.kind,
            TokenTree::Function(_) => TokenKind::Function,
        }
    }

    /// Where this node starts in the source.
    pub fn span(&self) -> Span {
        match self {
            TokenTree::Token(token) => token.span,
            TokenTree::Container(container) => container.span,
            TokenTree::Function(function) => function.span,
        }
    }

    /// Returns true for a white space leaf token.
    pub fn is_whitespace(&self) -> bool {
        self.kind() == TokenKind::Whitespace
    }

    /// Serializes this node back into CSS source text.
    ///
    /// Concatenating the stored opening marker, each child (recursively)
    /// and the stored closing marker reproduces the original source
    /// losslessly. This holds for malformed input too: an implicitly
    /// closed container stores an empty closing marker.
    pub fn write_css(&self, out: &mut String) {
        match self {
            TokenTree::Token(token) => out.push_str(&token.lexeme),
            TokenTree::Container(container) => container.write_css(out),
            TokenTree::Function(function) => function.write_css(out),
        }
    }

    /// Convenience wrapper around [`write_css`](Self::write_css).
    pub fn to_css_string(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}

/// A token that owns an ordered sequence of nested tokens.
///
/// Produced by the grouper for `(`, `[` and `{` tokens, and by the
/// ruleset parser for the synthetic selector wrapper. The container
/// exclusively owns its children; the matching closer is consumed into
/// `closing` and never appears in `content`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerToken {
    /// The kind of the opening token (`LeftParen`, `LeftBracket`,
    /// `LeftBrace`) or `Selector` for the synthetic wrapper.
    pub kind: TokenKind,

    /// The literal opening source text, e.g. `"{"`.
    pub opening: String,

    /// The literal closing source text, e.g. `"}"`.
    ///
    /// Empty when the container was implicitly closed by the end of the
    /// input, so serialization stays lossless for truncated sources.
    pub closing: String,

    /// The grouped tokens between the opening and closing markers.
    pub content: Vec<TokenTree>,

    /// Where the opening token starts in the source.
    pub span: Span,
}

impl ContainerToken {
    /// Serializes the container and its content back into CSS text.
    pub fn write_css(&self, out: &mut String) {
        out.push_str(&self.opening);
        for child in &self.content {
            child.write_css(out);
        }
        out.push_str(&self.closing);
    }

    /// Convenience wrapper around [`write_css`](Self::write_css).
    pub fn to_css_string(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}

/// A specialized container that also holds a function name.
///
/// Produced by the grouper for `name(` tokens. The stored name keeps
/// its source letter case; callers fold it if their CSS profile treats
/// function names case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionToken {
    /// The function name, without the trailing `(`.
    pub name: String,

    /// The literal opening source text, e.g. `"rgb("`.
    pub opening: String,

    /// The literal closing source text, `")"` or empty when implicitly
    /// closed.
    pub closing: String,

    /// The grouped argument tokens.
    pub content: Vec<TokenTree>,

    /// Where the function name starts in the source.
    pub span: Span,
}

impl FunctionToken {
    /// Serializes the function call back into CSS text.
    pub fn write_css(&self, out: &mut String) {
        out.push_str(&self.opening);
        for child in &self.content {
            child.write_css(out);
        }
        out.push_str(&self.closing);
    }

    /// Convenience wrapper around [`write_css`](Self::write_css).
    pub fn to_css_string(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}
