//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Decodes the HTML entities Twitter escapes in tweet bodies.
///
/// The API sends `&`, `<`, and `>` as `&amp;`, `&lt;`, and `&gt;`, even
/// inside hashtags and URLs. Everything else, including leading and
/// trailing whitespace and line breaks, is passed through untouched so a
/// tweet prints the way its author wrote it.
///
/// # Examples
///
/// ```
/// use tweetsearch::text::convert_html_entities;
/// let raw = "Shipping #rust&amp;wasm today &lt;3";
/// assert_eq!(convert_html_entities(raw), "Shipping #rust&wasm today <3");
/// ```
///
/// ```
/// use tweetsearch::text::convert_html_entities;
/// let raw = "RT @ferris: p99 &gt; 200ms?\n\nnot anymore https://t.co/x?a=1&amp;b=2";
/// assert_eq!(
///     convert_html_entities(raw),
///     "RT @ferris: p99 > 200ms?\n\nnot anymore https://t.co/x?a=1&b=2"
/// );
/// ```
///
/// ```
/// use tweetsearch::text::convert_html_entities;
/// let raw = "  indented code block\n";
/// assert_eq!(convert_html_entities(raw), raw);
/// ```
pub fn convert_html_entities(text: &str) -> String {
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or_else(|_| text.to_string())
}
