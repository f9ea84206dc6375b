//! Helper utility functions

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Round half away from zero to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn encode_png_data_url(bytes: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(bytes))
}

/// Bytes behind a base64 PNG data URL; `None` for anything else.
pub fn decode_png_data_url(content: &str) -> Option<Vec<u8>> {
    content
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .and_then(|payload| STANDARD.decode(payload).ok())
}
