//! Node label quoting.
//!
//! A node reference is an identifier followed by a bracketed label, e.g.
//! `A[Start here]` or `B{Is it (ok)?}`. Unquoted labels are trimmed and
//! wrapped in double quotes so the renderer treats them as literal text.
//! Labels containing a `"` never match, which keeps already quoted nodes
//! untouched and makes the pass idempotent.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The delimiter pair enclosing a node label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `[` / `]`
    Square,
    /// `{` / `}`
    Curly,
}

impl Delimiter {
    pub const ALL: [Delimiter; 2] = [Delimiter::Square, Delimiter::Curly];

    pub fn open(self) -> char {
        match self {
            Delimiter::Square => '[',
            Delimiter::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiter::Square => ']',
            Delimiter::Curly => '}',
        }
    }

    /// `identifier` `open` `label` `close`. The identifier is letters, digits
    /// and underscores only; the label is at least one character and holds
    /// no `"`, no closing delimiter and no newline.
    ///
    /// Captures: 1 = identifier plus opening delimiter, 2 = label, 3 = closing delimiter.
    fn pattern(self) -> String {
        let open = regex::escape(&self.open().to_string());
        let close = regex::escape(&self.close().to_string());
        format!(r#"([\p{{L}}\p{{N}}_]+{open})([^"{close}\n]+)({close})"#)
    }

    fn node_regex(self) -> &'static Regex {
        static SQUARE: OnceLock<Regex> = OnceLock::new();
        static CURLY: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            Delimiter::Square => &SQUARE,
            Delimiter::Curly => &CURLY,
        };
        cell.get_or_init(|| Regex::new(&self.pattern()).expect("Invalid node regex"))
    }
}

/// Result of a quoting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quoted {
    pub text: String,
    /// Number of node labels rewritten.
    pub quoted: usize,
}

/// Quote every unquoted label for one delimiter pair, left to right.
pub fn quote_labels(text: &str, delimiter: Delimiter) -> Quoted {
    let mut quoted = 0;
    let text = delimiter
        .node_regex()
        .replace_all(text, |caps: &Captures| {
            quoted += 1;
            format!("{}\"{}\"{}", &caps[1], trim_label(&caps[2]), &caps[3])
        })
        .into_owned();

    Quoted { text, quoted }
}

/// Trim whitespace, counting the ASCII file, group, record and unit
/// separators (U+001C..U+001F) as whitespace too.
fn trim_label(label: &str) -> &str {
    label.trim_matches(|c: char| c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c))
}

/// Square bracket pass followed by the curly brace pass.
pub fn quote_all_labels(text: &str) -> Quoted {
    Delimiter::ALL.iter().fold(
        Quoted {
            text: text.to_string(),
            quoted: 0,
        },
        |acc, &delimiter| {
            let pass = quote_labels(&acc.text, delimiter);
            Quoted {
                text: pass.text,
                quoted: acc.quoted + pass.quoted,
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn patterns_exclude_quotes_closers_and_newlines() {
        assert_eq!(Delimiter::Square.pattern(), r#"([\p{L}\p{N}_]+\[)([^"\]\n]+)(\])"#);
        assert_eq!(Delimiter::Curly.pattern(), r#"([\p{L}\p{N}_]+\{)([^"\}\n]+)(\})"#);
    }

    #[rstest]
    #[case("A[Start]", "A[\"Start\"]")]
    #[case("node[  hello world  ]", "node[\"hello world\"]")]
    #[case("D[Dev Env (local)]", "D[\"Dev Env (local)\"]")]
    #[case("A[one] --> B[two]", "A[\"one\"] --> B[\"two\"]")]
    #[case("snake_case_9[x]", "snake_case_9[\"x\"]")]
    #[case("A[   ]", "A[\"\"]")]
    #[case("B[ c\u{1F}]", "B[\"c\"]")]
    #[case("\u{B2}[a b]", "\u{B2}[\"a b\"]")]
    fn square_labels_are_trimmed_and_quoted(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote_labels(input, Delimiter::Square).text, expected);
    }

    #[rstest]
    #[case("B{Is it ok?}", "B{\"Is it ok?\"}")]
    #[case("B{ spaced  }", "B{\"spaced\"}")]
    #[case("B{a} C{b}", "B{\"a\"} C{\"b\"}")]
    fn curly_labels_are_trimmed_and_quoted(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote_labels(input, Delimiter::Curly).text, expected);
    }

    #[rstest]
    #[case::already_quoted("node[\"already quoted\"]")]
    #[case::quote_inside_label("A[say \"hi\" there]")]
    #[case::no_identifier("[floating label]")]
    #[case::space_before_bracket("A [label]")]
    #[case::empty_label("A[]")]
    #[case::label_spans_lines("A[first\nsecond]")]
    #[case::unclosed("A[never closed")]
    #[case::combining_mark_before_bracket("e\u{301}[x y]")]
    #[case::connector_punctuation_identifier("\u{203F}[x y]")]
    fn non_matching_square_nodes_are_untouched(#[case] input: &str) {
        let result = quote_labels(input, Delimiter::Square);

        assert_eq!(result.text, input);
        assert_eq!(result.quoted, 0);
    }

    #[test]
    fn already_quoted_curly_node_is_untouched() {
        let input = "B{\"Is it ok?\"}";
        assert_eq!(quote_labels(input, Delimiter::Curly).text, input);
    }

    #[test]
    fn square_pass_ignores_curly_nodes() {
        let input = "B{label two}";
        assert_eq!(quote_labels(input, Delimiter::Square).text, input);
    }

    #[test]
    fn nested_open_bracket_is_part_of_the_label() {
        let result = quote_labels("A[foo[bar]]", Delimiter::Square);

        assert_eq!(result.text, "A[\"foo[bar\"]]");
        assert_eq!(result.quoted, 1);
    }

    #[test]
    fn unicode_identifiers_count_as_word_characters() {
        let result = quote_labels("nœud[mon label]", Delimiter::Square);
        assert_eq!(result.text, "nœud[\"mon label\"]");
    }

    #[test]
    fn quote_all_handles_both_delimiters_independently() {
        let result = quote_all_labels("A[label one] --> B{label two}");

        assert_eq!(result.text, "A[\"label one\"] --> B{\"label two\"}");
        assert_eq!(result.quoted, 2);
    }

    #[test]
    fn quote_all_runs_square_before_curly() {
        // The square pass wraps the whole label first, then the curly pass
        // still finds the inner braced node.
        let result = quote_all_labels("A[x{y}]");

        assert_eq!(result.text, "A[\"x{\"y\"}\"]");
        assert_eq!(result.quoted, 2);
    }

    #[rstest]
    #[case("A[label one] --> B{label two}")]
    #[case("flowchart LR\n  a[ x ] -->|go| b{ y }\n  c[\"kept\"]\n")]
    #[case("A[foo[bar]] B{c{d}}")]
    #[case("A[x{y}]")]
    fn quoting_twice_equals_quoting_once(#[case] input: &str) {
        let once = quote_all_labels(input);
        let twice = quote_all_labels(&once.text);

        assert_eq!(twice.text, once.text);
        assert_eq!(twice.quoted, 0);
    }

    #[test]
    fn multiline_document() {
        let input = "flowchart TD\n    A[Start here] --> B{Is it (ok)?}\n    B -->|yes| C[\"Done\"]\n";
        let result = quote_all_labels(input);

        insta::assert_snapshot!(result.text, @r#"
flowchart TD
    A["Start here"] --> B{"Is it (ok)?"}
    B -->|yes| C["Done"]
"#);
        assert_eq!(result.quoted, 2);
    }
}
