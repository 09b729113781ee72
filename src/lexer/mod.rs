/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the CLAWCSS lexer.
 *
 * This module wires together the lexer sub-modules:
 *   - The scanning engine producing the flat token stream
 *   - The regular-expression pattern tables it is driven by
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * GitHub:   https://github.com/samwilcox/clawcss
 *
 * License:
 * This file is part of the CLAWCSS parser project.
 *
 * CLAWCSS is dual-licensed under the terms of:
 *   - The MIT license
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

/// Core scanning logic:
/// - Owns the `Lexer` struct
/// - Exposes the main `tokenize(source)` entry point
pub mod lexer;

/// The compiled regex pattern tables. Private to the lexer: the parser
/// layers only ever see the token stream.
mod patterns;

/// Re-export the public entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::tokenize;
pub use lexer::Lexer;
