//! Inline emphasis markup.
//!
//! Text is split on the literal `*` character: pieces at odd positions are
//! emphasized, pieces at even positions are plain. There is no escaping and
//! no error for an unmatched `*`; an odd number of asterisks simply leaves
//! the remainder of the text emphasized.

use serde::Serialize;

/// The emphasis delimiter.
pub const EMPHASIS_MARK: char = '*';

/// A contiguous run of text with a single emphasis state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    /// Span text, without delimiters.
    pub content: String,
    /// Whether the span is emphasized.
    pub emphasized: bool,
}

impl TextSpan {
    /// A plain span.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emphasized: false,
        }
    }

    /// An emphasized span.
    pub fn emphasized(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emphasized: true,
        }
    }
}

/// Splits `text` into alternating plain and emphasized spans.
///
/// Empty pieces are kept, so `"*x*"` yields three spans.
///
/// # Examples
///
/// ```
/// use gridpost::markup::{parse_emphasis, TextSpan};
///
/// assert_eq!(
///     parse_emphasis("a*b*c"),
///     vec![TextSpan::plain("a"), TextSpan::emphasized("b"), TextSpan::plain("c")]
/// );
/// ```
#[must_use]
pub fn parse_emphasis(text: &str) -> Vec<TextSpan> {
    text.split(EMPHASIS_MARK)
        .enumerate()
        .map(|(index, piece)| TextSpan {
            content: piece.to_string(),
            emphasized: index % 2 == 1,
        })
        .collect()
}

/// Splits `text` on `\n` and parses each line independently.
///
/// Emphasis never carries across a line break. Callers insert a break
/// between consecutive lines, none after the last.
#[must_use]
pub fn parse_multiline(text: &str) -> Vec<Vec<TextSpan>> {
    text.split('\n').map(parse_emphasis).collect()
}

/// Concatenates span contents, dropping the markup.
#[must_use]
pub fn plain_text(spans: &[TextSpan]) -> String {
    spans.iter().map(|s| s.content.as_str()).collect()
}
