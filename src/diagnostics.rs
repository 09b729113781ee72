/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Renders human-friendly, compiler-style diagnostics for
 *           CLAWCSS parse errors.
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

use crate::error::CssError;
use crate::span::Span;

/// Renders parse errors as compiler-style diagnostics.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source text of the stylesheet being parsed.
    ///
    /// Stored as a single string so specific lines can be extracted
    /// for error reporting.
    source: String,

    /// Name of the source file (e.g. `style.css`).
    ///
    /// Used only for display purposes in diagnostics.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given stylesheet.
    ///
    /// Both parameters accept any type convertible into `String` for
    /// ergonomic call-sites.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a formatted error diagnostic into a string.
    ///
    /// # Output Example
    /// ```text
    /// error[E_MISSING_COLON]: expected ':'
    ///   --> style.css:3:9
    ///    |
    ///   3 |     color red;
    ///    |         ^
    /// help: A declaration is written 'property: value'.
    /// ```
    pub fn render(&self, error: &CssError) -> String {
        let Span { line, column } = error.span;

        let lines: Vec<&str> = self.source.lines().collect();

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        // `saturating_sub` prevents underflow if line == 0.
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        let mut out = String::new();

        out.push_str(&format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        ));

        out.push_str("   |\n");
        out.push_str(&format!("{:>3} | {}\n", line, src_line));

        // Caret underline pointing at the offending column.
        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        out.push_str(&format!("   | {}\n", underline));

        if let Some(help) = &error.help {
            out.push_str(&format!("\nhelp: {}\n", help));
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &CssError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn renders_caret_at_error_column() {
        let source = "a {\n    color red;\n}";
        let printer = DiagnosticPrinter::new("style.css", source);
        let error = CssError::missing_colon(Span::new(2, 10));

        let rendered = printer.render(&error);
        assert!(rendered.contains("error[E_MISSING_COLON]: expected ':'"));
        assert!(rendered.contains("--> style.css:2:11"));
        assert!(rendered.contains("  2 |     color red;"));
        assert!(rendered.contains(&format!("   | {}^", " ".repeat(10))));
        assert!(rendered.contains("help: A declaration is written"));
    }
}
