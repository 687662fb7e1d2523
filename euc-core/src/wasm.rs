//! WASM bindings for euc-core
//!
//! Provides JavaScript-accessible functions for highlighting and evaluating
//! pattern expressions in a browser editor.

#[cfg(feature = "wasm")]
use crate::parser::error::EucError;
#[cfg(feature = "wasm")]
use crate::types::{to_f64, EvalConfig, Pattern};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::parser::lexer::{Lexer, SpannedToken, Token};
use crate::parser::segment_parser::parse_segment;

/// A highlight span for syntax highlighting in the editor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightSpan {
    /// Byte offset from start of source
    pub start: usize,
    pub len: usize,
    pub token_type: String,
    pub text: String,
    /// UTF-16 code unit offset from start of source (for JavaScript interop)
    pub utf16_start: usize,
    /// UTF-16 code unit length of token
    pub utf16_len: usize,
}

impl HighlightSpan {
    fn new(source: &str, start: usize, text: &str, token_type: &str) -> Self {
        HighlightSpan {
            start,
            len: text.len(),
            token_type: token_type.to_string(),
            text: text.to_string(),
            utf16_start: source[..start].encode_utf16().count(),
            utf16_len: text.encode_utf16().count(),
        }
    }

    /// Spans for one token. Segments are broken into their dash-separated parts.
    fn from_spanned_token(token: &SpannedToken, source: &str) -> Vec<Self> {
        let start = token.span.offset;
        let text = &source[start..start + token.span.len];

        match &token.token {
            Token::Operator(_) => vec![Self::new(source, start, text, "operator")],
            Token::Segment(_) if parse_segment(text, token.span).is_err() => {
                vec![Self::new(source, start, text, "invalid")]
            }
            Token::Segment(_) => {
                let mut spans = Vec::new();
                let mut offset = start;
                for (i, part) in text.split('-').enumerate() {
                    if i > 0 {
                        spans.push(Self::new(source, offset - 1, "-", "punctuation"));
                    }
                    if !part.is_empty() {
                        spans.push(Self::new(source, offset, part, Self::classify_part(i)));
                    }
                    offset += part.len() + 1;
                }
                spans
            }
        }
    }

    fn classify_part(index: usize) -> &'static str {
        match index {
            0 | 1 => "constant.numeric",
            _ => "function.modifier",
        }
    }
}

/// Tokenize input and return highlight spans
pub fn tokenize_for_highlighting(input: &str) -> Vec<HighlightSpan> {
    Lexer::new(input)
        .tokenize()
        .iter()
        .flat_map(|t| HighlightSpan::from_spanned_token(t, input))
        .collect()
}

// ============================================================================
// WASM Bindings
// ============================================================================

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn tokenize(input: &str) -> JsValue {
    let spans = tokenize_for_highlighting(input);
    serde_wasm_bindgen::to_value(&spans).unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EvalErrorJS {
    pub kind: String,
    pub message: String,
    pub source: usize,
    pub start: usize,
    pub end: usize,
}

#[cfg(feature = "wasm")]
impl From<EucError> for EvalErrorJS {
    fn from(e: EucError) -> Self {
        EvalErrorJS {
            kind: format!("{:?}", e.kind),
            message: e.message,
            source: e.span.source,
            start: e.span.offset,
            end: e.span.offset + e.span.len,
        }
    }
}

#[cfg(feature = "wasm")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EvalResult {
    success: bool,
    steps: Vec<bool>,
    dash: String,
    onsets: Vec<usize>,
    error: Option<EvalErrorJS>,
}

#[cfg(feature = "wasm")]
impl From<Result<Pattern, EucError>> for EvalResult {
    fn from(result: Result<Pattern, EucError>) -> Self {
        match result {
            Ok(pattern) => EvalResult {
                success: true,
                dash: pattern.dash(),
                onsets: pattern.onsets(),
                steps: pattern.into_steps(),
                error: None,
            },
            Err(e) => EvalResult {
                success: false,
                steps: vec![],
                dash: String::new(),
                onsets: vec![],
                error: Some(e.into()),
            },
        }
    }
}

/// Browser editors evaluate on every keystroke, so cap runaway repeats
#[cfg(feature = "wasm")]
const EDITOR_MAX_LEN: usize = 1 << 16;

#[cfg(feature = "wasm")]
fn editor_evaluator() -> crate::parser::Evaluator {
    crate::parser::Evaluator::with_config(EvalConfig::capped(EDITOR_MAX_LEN))
}

/// Evaluate one pattern expression
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = evaluate)]
pub fn evaluate_js(input: &str) -> JsValue {
    let result: EvalResult = editor_evaluator().evaluate(input).into();
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Evaluate an array of expression strings as one token stream.
/// Non-string entries are skipped.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = evaluateAll)]
pub fn evaluate_all_js(inputs: js_sys::Array) -> JsValue {
    let sources: Vec<String> = inputs.iter().filter_map(|v| v.as_string()).collect();
    let result: EvalResult = editor_evaluator().evaluate(&sources).into();
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Normalised onset times of an expression, as floats in [0, 1)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = onsetTimes)]
pub fn onset_times_js(input: &str) -> JsValue {
    match editor_evaluator().evaluate(input) {
        Ok(pattern) => {
            let times: Vec<f64> = pattern.norm().into_iter().map(to_f64).collect();
            serde_wasm_bindgen::to_value(&serde_json::json!({
                "success": true,
                "times": times,
            }))
            .unwrap_or(JsValue::NULL)
        }
        Err(e) => serde_wasm_bindgen::to_value(&serde_json::json!({
            "success": false,
            "error": e.to_string(),
        }))
        .unwrap_or(JsValue::NULL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(input: &str) -> Vec<(String, String)> {
        tokenize_for_highlighting(input)
            .into_iter()
            .map(|s| (s.text, s.token_type))
            .collect()
    }

    #[test]
    fn test_highlight_segment_parts() {
        let spans = types("3-8-r2 + 4");
        let expected: Vec<(String, String)> = [
            ("3", "constant.numeric"),
            ("-", "punctuation"),
            ("8", "constant.numeric"),
            ("-", "punctuation"),
            ("r2", "function.modifier"),
            ("+", "operator"),
            ("4", "invalid"),
        ]
        .iter()
        .map(|(t, k)| (t.to_string(), k.to_string()))
        .collect();
        assert_eq!(spans, expected);
    }

    #[test]
    fn test_highlight_offsets() {
        let spans = tokenize_for_highlighting("é 1-2");
        // "é" is two bytes but a single UTF-16 unit
        assert_eq!(spans[0].token_type, "invalid");
        assert_eq!(spans[1].start, 3);
        assert_eq!(spans[1].utf16_start, 2);
        assert_eq!(spans[3].text, "2");
        assert_eq!(spans[3].start, 5);
    }

    #[test]
    fn test_highlight_empty_parts() {
        let spans = types("-1-2");
        assert_eq!(spans[0], ("-".to_string(), "punctuation".to_string()));
        assert_eq!(spans[1], ("1".to_string(), "constant.numeric".to_string()));
    }
}
