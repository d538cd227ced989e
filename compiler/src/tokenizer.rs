use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::ConvError;
use crate::utils::{error, quote};

lazy_static! {
    // Optional `[]` and `*` modifiers, then a Unicode identifier. Dots allow qualified names like `time.Time`.
    pub static ref WORD_RX: Regex = Regex::new(r"^(?:\[\])?\*?[\p{L}_][\p{L}\p{N}_.]*").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Type,
    Struct,
    LeftBrace,
    RightBrace,
    Ident,
    /// A type carrying a `[]` or `*` prefix.
    TypeAnnotation,
    /// Contents of a backtick struct tag.
    Tag,
    /// Text after `//`, trimmed.
    Comment,
    NewLine,
    Eof,
}

impl TokenKind {
    /// Human readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Type => "\"type\"",
            TokenKind::Struct => "\"struct\"",
            TokenKind::LeftBrace => "\"{\"",
            TokenKind::RightBrace => "\"}\"",
            TokenKind::Ident => "identifier",
            TokenKind::TypeAnnotation => "type",
            TokenKind::Tag => "struct tag",
            TokenKind::Comment => "comment",
            TokenKind::NewLine => "newline",
            TokenKind::Eof => "end of input",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

impl Token {
    /// Quoted token text for diagnostics, or the kind name when the text is empty.
    pub fn quoted(&self) -> String {
        if self.text.is_empty() {
            self.kind.describe().to_string()
        } else {
            quote(&self.text)
        }
    }
}

/// Splits source text into tokens. Blank space other than newlines is dropped and an
/// `Eof` token is always appended.
pub fn tokenize_source(text: &str) -> Result<Vec<Token>, ConvError> {
    let mut cursor     = Cursor::new(text);
    let mut tokens     = Vec::new();
    let mut line       = 1;
    let mut line_start = 0;

    while let Some(c) = cursor.peek() {
        let start  = cursor.position();
        let column = start - line_start + 1;

        let mut push = |kind: TokenKind, text: String| {
            tokens.push(Token { kind, text, line, column });
        };

        match c {
            '\n' => {
                cursor.next()?;
                push(TokenKind::NewLine, "\n".to_string());
                line += 1;
                line_start = cursor.position();
            }
            c if c.is_whitespace() => {
                cursor.next()?;
            }
            '{' => {
                cursor.next()?;
                push(TokenKind::LeftBrace, "{".to_string());
            }
            '}' => {
                cursor.next()?;
                push(TokenKind::RightBrace, "}".to_string());
            }
            '/' if cursor.peek_nth(1) == Some('/') => {
                // A comment on the last line runs to the end of input.
                match cursor.skip_until('\n') {
                    Ok(()) | Err(ConvError::DelimiterNotFound(_)) => {}
                    Err(e) => return Err(e),
                }
                let body = cursor.slice(start + 2, cursor.position());
                push(TokenKind::Comment, body.trim().to_string());
            }
            '`' => {
                cursor.jump_to('`')?;
                let body = cursor.slice(start + 1, cursor.position() - 1);
                let newlines = body.matches('\n').count();
                push(TokenKind::Tag, body);
                if newlines > 0 {
                    line += newlines;
                    let mut back = cursor.position();
                    while back > start && cursor.slice(back - 1, back) != "\n" {
                        back -= 1;
                    }
                    line_start = back;
                }
            }
            _ => {
                let rest = cursor.rest();
                let Some(m) = WORD_RX.find(rest) else {
                    let unexpected = rest.split_whitespace().next().unwrap_or_default();
                    return Err(error(
                        &format!("Syntax error: {}", quote(unexpected)),
                        line,
                        column,
                    ));
                };
                let word = m.as_str().to_string();
                cursor.advance_by(word.chars().count());

                let kind = match word.as_str() {
                    "type" => TokenKind::Type,
                    "struct" => TokenKind::Struct,
                    w if w.starts_with('[') || w.starts_with('*') => TokenKind::TypeAnnotation,
                    _ => TokenKind::Ident,
                };
                push(kind, word);
            }
        }
    }

    tokens.push(Token {
        kind:   TokenKind::Eof,
        text:   String::new(),
        line,
        column: cursor.position() - line_start + 1,
    });
    trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
