use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConvError;

lazy_static! {
    static ref TAG_ENTRY_RX: Regex = Regex::new(r#"([A-Za-z_][A-Za-z0-9_]*):"([^"]*)""#).unwrap();
}

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("{:?}", text))
}

pub fn error(msg: &str, line: usize, column: usize) -> ConvError {
    ConvError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}

/// Looks up `key` in a struct tag such as `json:"name,omitempty" yaml:"name"`.
pub fn tag_value<'a>(tag: &'a str, key: &str) -> Option<&'a str> {
    TAG_ENTRY_RX
        .captures_iter(tag)
        .find(|c| &c[1] == key)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

/// Converts a string to snake_case.
/// Consecutive uppercase letters stay together so that acronyms remain intact
/// (e.g. "sessionID" becomes "session_id", "HTTPServer" becomes "http_server").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                if (!prev.is_uppercase() && prev != '_')
                    || (prev.is_uppercase() && i + 1 < chars.len() && chars[i + 1].is_lowercase())
                {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}
