//! Structured extraction from model responses
//!
//! Models are not trusted to avoid prose wrapping or code fences around the
//! JSON they were asked to emit. Extraction tries an ordered list of
//! candidate spans - fenced code block, then first-to-last bracket span of
//! the expected kind, then the raw text - and each candidate is
//! independently deserialized into the caller's type. Typed deserialization
//! doubles as schema validation: valid JSON with missing or misnamed
//! required fields is a parse failure, not a success.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Bracket kind the call site expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    /// `{...}`
    Object,
    /// `[...]`
    Array,
}

impl JsonShape {
    fn open(&self) -> char {
        match self {
            JsonShape::Object => '{',
            JsonShape::Array => '[',
        }
    }

    fn close(&self) -> char {
        match self {
            JsonShape::Object => '}',
            JsonShape::Array => ']',
        }
    }
}

/// Content of the first fenced code block, with an optional language tag
/// stripped from the opening fence line.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}

/// First-opening to last-matching-closing span of the expected bracket kind.
fn bracket_span(text: &str, shape: JsonShape) -> Option<&str> {
    let start = text.find(shape.open())?;
    let end = text.rfind(shape.close())?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// The span the parser would try first, if any. Exposed for diagnostics;
/// `parse_structured` is the real entry point.
pub fn extract_span(text: &str, shape: JsonShape) -> Option<&str> {
    let text = text.trim();
    fenced_block(text).or_else(|| bracket_span(text, shape))
}

/// Parse a model response into `T`.
///
/// Tries, in order: the fenced-block content, the bracket span, the raw
/// trimmed text. The first candidate that deserializes wins. When none
/// does, the error carries the (truncated) raw response for the log.
pub fn parse_structured<T: DeserializeOwned>(text: &str, shape: JsonShape) -> Result<T> {
    let trimmed = text.trim();

    let candidates = [
        fenced_block(trimmed),
        bracket_span(trimmed, shape),
        Some(trimmed),
    ];

    let mut last_err = None;
    for candidate in candidates.into_iter().flatten() {
        match serde_json::from_str(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_err = Some(e),
        }
    }

    let truncated = if trimmed.len() > 200 {
        // Back off to a char boundary so multibyte text cannot panic the slice
        let mut end = 200;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &trimmed[..end])
    } else {
        trimmed.to_string()
    };
    Err(Error::InvalidData(match last_err {
        Some(e) => format!("Invalid JSON from AI: {} | Raw: {}", e, truncated),
        None => format!("No JSON found in AI response | Raw: {}", truncated),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Tip {
        title: String,
        message: String,
    }

    #[test]
    fn test_parse_bare_object() {
        let tip: Tip =
            parse_structured(r#"{"title": "Save", "message": "Cut costs"}"#, JsonShape::Object)
                .unwrap();
        assert_eq!(tip.title, "Save");
    }

    #[test]
    fn test_parse_object_wrapped_in_prose() {
        let response = r#"Here's your tip:
{"title": "Save", "message": "Cut costs"}
Hope that helps!"#;
        let tip: Tip = parse_structured(response, JsonShape::Object).unwrap();
        assert_eq!(tip.message, "Cut costs");
    }

    #[test]
    fn test_parse_array_in_code_fence_with_prose() {
        let response = r#"Sure! Here are the tips:
```json
[{"title": "A", "message": "one"}, {"title": "B", "message": "two"}]
```
Let me know if you need more."#;
        let tips: Vec<Tip> = parse_structured(response, JsonShape::Array).unwrap();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[1].title, "B");
    }

    #[test]
    fn test_fenced_result_matches_bare_result() {
        let bare = r#"[{"title": "A", "message": "one"}]"#;
        let fenced = format!("```json\n{}\n```", bare);
        let a: Vec<Tip> = parse_structured(bare, JsonShape::Array).unwrap();
        let b: Vec<Tip> = parse_structured(&fenced, JsonShape::Array).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_brackets_is_an_error() {
        let result: Result<Tip> =
            parse_structured("I'm sorry, I can't help with that.", JsonShape::Object);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_fields_are_an_error() {
        // Valid JSON, wrong schema: must fail, not succeed with gaps
        let result: Result<Tip> =
            parse_structured(r#"{"headline": "Save", "body": "Cut"}"#, JsonShape::Object);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_bracket_kind_falls_through() {
        // Expecting an array but the text only has an object: raw parse
        // attempt also fails, so the whole extraction errors
        let result: Result<Vec<Tip>> =
            parse_structured(r#"{"title": "A", "message": "x"}"#, JsonShape::Array);
        assert!(result.is_err());
    }

    #[test]
    fn test_long_raw_is_truncated_in_error() {
        let noise = "x".repeat(500);
        let err = parse_structured::<Tip>(&noise, JsonShape::Object).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("..."));
        assert!(msg.len() < 400);
    }

    #[test]
    fn test_multibyte_raw_truncates_on_char_boundary() {
        // 100 euro signs is 300 bytes with a char straddling byte 200; the
        // truncated error message must not slice mid-character
        let reply = "€".repeat(100);
        let err = parse_structured::<Tip>(&reply, JsonShape::Object).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("..."));

        let emoji = "📈 markets are up! ".repeat(20);
        let err = parse_structured::<Tip>(&emoji, JsonShape::Object).unwrap_err();
        assert!(err.to_string().contains("..."));
    }

    #[test]
    fn test_extract_span_prefers_fence() {
        let response = "prose {not json} ```\n[1, 2]\n``` trailing";
        assert_eq!(extract_span(response, JsonShape::Array), Some("[1, 2]"));
    }

    #[test]
    fn test_extract_span_bracket_fallback() {
        let response = r#"answer: {"a": 1} done"#;
        assert_eq!(
            extract_span(response, JsonShape::Object),
            Some(r#"{"a": 1}"#)
        );
    }
}
