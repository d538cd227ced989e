use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("No more tokens")]
    NoMoreTokens,

    #[error("Cannot jump to {0:?}")]
    DelimiterNotFound(char),

    #[error("Expected {expected} but found {found} at line {line}, column {column}")]
    UnexpectedToken {
        expected: String,
        found:    String,
        line:     usize,
        column:   usize,
    },

    #[error("Type {name} opened at line {line}, column {column} is missing its closing \"}}\"")]
    UnterminatedBlock {
        name:   String,
        line:   usize,
        column: usize,
    },

    #[error("No such field {0}")]
    FieldNotFound(String),
}
