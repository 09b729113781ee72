/*
 * ==========================================================================
 * CLAWCSS - CSS with Claws!
 * ==========================================================================
 *
 * File:      tests/stylesheet.rs
 * Purpose:   End-to-end tests for the tolerant stylesheet parser.
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

use clawcss::{grouper, lexer, parse, Recovery, Rule, Ruleset, TokenKind};

fn only_ruleset(source: &str) -> Ruleset {
    let stylesheet = parse(source);
    assert_eq!(stylesheet.rules.len(), 1, "source: {:?}", source);
    match stylesheet.rules.into_iter().next() {
        Some(Rule::Ruleset(ruleset)) => ruleset,
        other => panic!("expected a ruleset, got {:?}", other),
    }
}

#[test]
fn grouped_trees_round_trip_to_the_source() {
    for source in [
        "a { color: red }\n@media print { b { margin: 0 auto } }",
        "h1[lang|=\"en\"] , h2 ~= x { background: url( 'a b.png' ) }",
        "a { color: rgb(1, 2, 3)",
        "x ) y ] z }",
        "((((a))))",
    ] {
        let serialized: String = grouper::regroup(&lexer::tokenize(source))
            .iter()
            .map(|tree| tree.to_css_string())
            .collect();
        assert_eq!(serialized, source);
    }
}

#[test]
fn reparsing_a_serialized_ruleset_is_idempotent() {
    let ruleset = only_ruleset("H1 > a  { Color : Red ; margin:0   auto }");

    // Render the parsed rule back to CSS and parse it again.
    let mut rendered = ruleset.selector.to_css_string();
    rendered.push('{');
    for declaration in &ruleset.declarations {
        rendered.push_str(&declaration.property);
        rendered.push(':');
        rendered.push_str(&declaration.value_css());
        rendered.push(';');
    }
    rendered.push('}');

    // Spans shift in the rendered text, so compare structure: the
    // selector tokens and each property/value pair.
    let reparsed = only_ruleset(&rendered);
    assert_eq!(
        reparsed.selector.to_css_string(),
        ruleset.selector.to_css_string()
    );
    let pairs = |ruleset: &Ruleset| -> Vec<(String, String)> {
        ruleset
            .declarations
            .iter()
            .map(|declaration| {
                (declaration.property.clone(), declaration.value_css())
            })
            .collect()
    };
    assert_eq!(pairs(&reparsed), pairs(&ruleset));
}

#[test]
fn declaration_errors_are_isolated_from_their_siblings() {
    let stylesheet = parse("x { a:1; b 2; c:3; }");

    let Rule::Ruleset(ruleset) = &stylesheet.rules[0] else {
        panic!("expected a ruleset");
    };
    let properties: Vec<&str> = ruleset
        .declarations
        .iter()
        .map(|declaration| declaration.property.as_str())
        .collect();
    assert_eq!(properties, vec!["a", "c"]);

    assert_eq!(stylesheet.errors.len(), 1);
    assert_eq!(stylesheet.errors[0].recovery, Recovery::Declaration);
    // The error points at the offending middle declaration.
    assert_eq!(stylesheet.errors[0].span.line, 1);
    assert_eq!(stylesheet.errors[0].span.column, 11);
}

#[test]
fn an_invalid_selector_discards_the_whole_statement() {
    let stylesheet = parse("a ; b { color: red }");
    assert!(stylesheet.rules.is_empty());
    assert_eq!(stylesheet.errors.len(), 1);
    assert_eq!(stylesheet.errors[0].recovery, Recovery::Statement);
    assert_eq!(stylesheet.errors[0].token, Some(TokenKind::Semicolon));
}

#[test]
fn parsing_resumes_at_the_next_top_level_statement() {
    let stylesheet = parse("a } b { x:1 } p { y:2 }");
    assert_eq!(stylesheet.errors.len(), 1);
    assert_eq!(stylesheet.rules.len(), 1);
    match &stylesheet.rules[0] {
        Rule::Ruleset(ruleset) => {
            assert_eq!(ruleset.selector.to_css_string(), "p ");
            assert_eq!(ruleset.declarations[0].property, "y");
        }
        other => panic!("expected a ruleset, got {:?}", other),
    }
}

#[test]
fn empty_declarations_are_skipped_silently() {
    let ruleset = only_ruleset("x { ;  ; a:1 }");
    assert_eq!(ruleset.declarations.len(), 1);
    assert_eq!(ruleset.declarations[0].property, "a");
}

#[test]
fn an_at_rule_terminated_by_a_semicolon_has_no_body() {
    let stylesheet = parse("@import \"x.css\";");
    assert!(stylesheet.errors.is_empty());
    match &stylesheet.rules[0] {
        Rule::AtRule(at_rule) => {
            assert_eq!(at_rule.keyword, "@import");
            assert_eq!(at_rule.head.len(), 1);
            assert_eq!(at_rule.head[0].to_css_string(), "\"x.css\"");
            assert!(at_rule.body.is_none());
        }
        other => panic!("expected an at-rule, got {:?}", other),
    }
}

#[test]
fn at_rule_bodies_are_kept_raw_for_profile_parsers() {
    let stylesheet = parse("@page :left { margin: 1in; size: a4 }");
    match &stylesheet.rules[0] {
        Rule::AtRule(at_rule) => {
            let body = at_rule.body.as_ref().expect("body block");
            // The core parser leaves the body unvalidated; a profile
            // parser extracts declarations with the fragment API.
            let (declarations, errors) =
                clawcss::parser::parse_declaration_list(&body.content);
            assert!(errors.is_empty());
            assert_eq!(declarations.len(), 2);
            assert_eq!(declarations[0].property, "margin");
            assert_eq!(declarations[1].property, "size");
        }
        other => panic!("expected an at-rule, got {:?}", other),
    }
}

#[test]
fn keywords_and_properties_fold_but_values_do_not() {
    let stylesheet = parse("@IMPORT \"X.css\";\nX { COLOR:Red }");
    match &stylesheet.rules[0] {
        Rule::AtRule(at_rule) => assert_eq!(at_rule.keyword, "@import"),
        other => panic!("expected an at-rule, got {:?}", other),
    }
    match &stylesheet.rules[1] {
        Rule::Ruleset(ruleset) => {
            assert_eq!(ruleset.declarations[0].property, "color");
            assert_eq!(ruleset.declarations[0].value_css(), "Red");
        }
        other => panic!("expected a ruleset, got {:?}", other),
    }
}

#[test]
fn a_missing_closing_brace_still_yields_the_ruleset() {
    let ruleset = only_ruleset("a { color: red");
    assert_eq!(ruleset.declarations.len(), 1);
    assert_eq!(ruleset.declarations[0].property, "color");
    assert_eq!(ruleset.declarations[0].value_css(), "red");
}

#[test]
fn legacy_sgml_markers_are_skipped_at_the_top_level() {
    let stylesheet = parse("<!-- a { x:1 } -->");
    assert!(stylesheet.errors.is_empty());
    assert_eq!(stylesheet.rules.len(), 1);
}

#[test]
fn results_serialize_to_json() {
    let stylesheet = parse("a { x:1; y }");
    let json = stylesheet.to_json();
    assert!(json.contains("\"rules\""));
    assert!(json.contains("\"errors\""));
    assert!(json.contains("E_MISSING_COLON"));

    let parsed: serde_json::Value =
        serde_json::from_str(&json).expect("valid JSON");
    assert!(parsed["rules"].is_array());
}
