/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the CLAWCSS recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and the stylesheet driver
 *   - Statement parsing (at-rules and rulesets)
 *   - Declaration-list, declaration and value parsing
 *   - The "any" / "block" grammar validators
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its cursor helpers
/// - Exposes the main `parse_stylesheet(trees)` entry point
pub mod parser;

/// Statement-level parsing:
/// - at-rules (keyword, head, optional body)
/// - rulesets (selector, declaration block)
pub mod statements;

/// Declaration-level parsing:
/// - `;`-separated declaration lists with per-declaration recovery
/// - single declarations and property values
pub mod declarations;

/// Grammar-conformance validators for the generic `any` and `block`
/// productions, shared by values, selectors and at-rule heads.
pub mod validate;

/// Re-export the public entry points so callers can use
/// `crate::parser::parse_stylesheet(...)` and the fragment parsers.
pub use declarations::{parse_declaration, parse_declaration_list, parse_value};
pub use parser::{parse_stylesheet, Parser};
pub use statements::{parse_at_rule, parse_ruleset};
pub use validate::{validate_any, validate_block};
