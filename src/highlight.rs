//! Lexical classification of JSON text for colorized display

use crate::utils::escape_html;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Quoted string (optionally followed by a colon), boolean/null, number.
    // Word boundaries and digits are ASCII-only, as in browser regexes.
    static ref JSON_TOKEN_PATTERN: Regex = Regex::new(
        r#""(?:\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(?:\s*:)?|(?-u:\b)(?:true|false|null)(?-u:\b)|-?[0-9]+(?:\.[0-9]*)?(?:[eE][+\-]?[0-9]+)?"#
    ).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanClass {
    /// A string followed by a colon, colon included.
    Key,
    String,
    /// Booleans, `null` and numbers.
    Value,
    /// Text no token matched (punctuation, whitespace, junk).
    Literal,
}

impl SpanClass {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SpanClass::Key => Some("json-key"),
            SpanClass::String => Some("json-string"),
            SpanClass::Value => Some("json-value"),
            SpanClass::Literal => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub class: SpanClass,
}

impl Span {
    fn new(text: &str, class: SpanClass) -> Self {
        Self {
            text: text.to_string(),
            class,
        }
    }
}

/// Split text into classified spans. Concatenating the span texts gives the
/// input back unchanged; the input does not have to be valid JSON.
pub fn classify(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for token in JSON_TOKEN_PATTERN.find_iter(text) {
        if token.start() > cursor {
            spans.push(Span::new(&text[cursor..token.start()], SpanClass::Literal));
        }
        spans.push(Span::new(token.as_str(), token_class(token.as_str())));
        cursor = token.end();
    }
    if cursor < text.len() {
        spans.push(Span::new(&text[cursor..], SpanClass::Literal));
    }

    spans
}

fn token_class(token: &str) -> SpanClass {
    if token.starts_with('"') {
        if token.ends_with(':') {
            SpanClass::Key
        } else {
            SpanClass::String
        }
    } else {
        SpanClass::Value
    }
}

/// Rebuild the source text from spans.
pub fn concat(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// HTML for display: classified spans become `<span class="json-*">`, all
/// text is escaped.
pub fn render_html(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        let text = escape_html(&span.text);
        match span.class.css_class() {
            Some(class) => out.push_str(&format!("<span class=\"{}\">{}</span>", class, text)),
            None => out.push_str(&text),
        }
    }
    out
}

pub fn highlight_json(text: &str) -> String {
    render_html(&classify(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classified(spans: &[Span]) -> Vec<(SpanClass, &str)> {
        spans
            .iter()
            .filter(|s| s.class != SpanClass::Literal)
            .map(|s| (s.class, s.text.as_str()))
            .collect()
    }

    #[test]
    fn test_simple_object() {
        let spans = classify(r#"{"a":1}"#);
        assert_eq!(
            classified(&spans),
            vec![(SpanClass::Key, "\"a\":"), (SpanClass::Value, "1")]
        );
        assert_eq!(concat(&spans), r#"{"a":1}"#);
    }

    #[test]
    fn test_all_token_classes() {
        let text = r#"{"name" : "X", "ok": true, "none": null, "n": -1.5e+3}"#;
        let spans = classify(text);
        assert_eq!(
            classified(&spans),
            vec![
                (SpanClass::Key, "\"name\" :"),
                (SpanClass::String, "\"X\""),
                (SpanClass::Key, "\"ok\":"),
                (SpanClass::Value, "true"),
                (SpanClass::Key, "\"none\":"),
                (SpanClass::Value, "null"),
                (SpanClass::Key, "\"n\":"),
                (SpanClass::Value, "-1.5e+3"),
            ]
        );
        assert_eq!(concat(&spans), text);
    }

    #[test]
    fn test_escaped_quotes_stay_inside_string() {
        let spans = classify(r#"["say \"hi\" é"]"#);
        assert_eq!(
            classified(&spans),
            vec![(SpanClass::String, r#""say \"hi\" é""#)]
        );
    }

    #[test]
    fn test_literal_words_need_boundaries() {
        let spans = classify("nullable trueish");
        assert!(classified(&spans).is_empty());
    }

    #[test]
    fn test_ascii_boundaries_and_digits() {
        let spans = classify("[étrue, ٣, 7]");
        assert_eq!(
            classified(&spans),
            vec![(SpanClass::Value, "true"), (SpanClass::Value, "7")]
        );
        assert_eq!(concat(&spans), "[étrue, ٣, 7]");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let text = "{\n  \"manifest_version\": 3,\n  \"permissions\": [\"storage\"]\n}";
        let once = classify(text);
        let twice = classify(&concat(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_render_html() {
        assert_eq!(
            highlight_json(r#"{"a":"<b>"}"#),
            "{<span class=\"json-key\">&quot;a&quot;:</span><span class=\"json-string\">&quot;&lt;b&gt;&quot;</span>}"
        );
    }
}
