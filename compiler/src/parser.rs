use tracing::debug;

use crate::{
    error::ConvError,
    tokenizer::{Token, TokenKind},
    types::{FieldDesc, StructDesc},
};

/// Cursor over a token slice that hides newlines and free-standing comments.
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream { tokens, index: 0 }
    }

    fn is_trivia(tok: &Token) -> bool {
        matches!(tok.kind, TokenKind::NewLine | TokenKind::Comment)
    }

    fn skip_trivia(&mut self) {
        while self.tokens.get(self.index).is_some_and(Self::is_trivia) {
            self.index += 1;
        }
    }

    /// True while a significant token other than `Eof` remains.
    pub fn has_next(&mut self) -> bool {
        self.skip_trivia();
        self.tokens
            .get(self.index)
            .is_some_and(|t| t.kind != TokenKind::Eof)
    }

    pub fn next_significant(&mut self) -> Result<&'a Token, ConvError> {
        if !self.has_next() {
            return Err(ConvError::NoMoreTokens);
        }
        let tok = &self.tokens[self.index];
        self.index += 1;
        Ok(tok)
    }

    /// Consumes the token right after the previous one when it has the given kind.
    /// Newlines are not skipped, so only same-line trailers are picked up.
    pub fn take_trailing(&mut self, kind: TokenKind) -> Option<&'a Token> {
        let tok = self.tokens.get(self.index).filter(|t| t.kind == kind)?;
        self.index += 1;
        Some(tok)
    }

    pub fn expect(&mut self, kinds: &[TokenKind], expected: &str) -> Result<&'a Token, ConvError> {
        let tok = self.next_significant()?;
        if !kinds.contains(&tok.kind) {
            return Err(unexpected(tok, expected));
        }
        Ok(tok)
    }
}

fn unexpected(tok: &Token, expected: &str) -> ConvError {
    ConvError::UnexpectedToken {
        expected: expected.to_string(),
        found:    tok.quoted(),
        line:     tok.line,
        column:   tok.column,
    }
}

enum ParseState<'a> {
    BetweenBlocks,
    InBlock {
        name:   &'a Token,
        fields: Vec<FieldDesc>,
    },
}

/// Parses a sequence of `type <Name> struct { <Field> <Type> ... }` blocks.
///
/// The first error aborts the whole pass; nothing parsed before it is returned.
pub fn parse_structs(tokens: &[Token]) -> Result<Vec<StructDesc>, ConvError> {
    let mut stream  = TokenStream::new(tokens);
    let mut structs = Vec::new();
    let mut state   = ParseState::BetweenBlocks;

    loop {
        state = match state {
            ParseState::BetweenBlocks => {
                if !stream.has_next() {
                    break;
                }
                stream.expect(&[TokenKind::Type], TokenKind::Type.describe())?;
                let name = stream.expect(&[TokenKind::Ident], "type name")?;
                stream.expect(&[TokenKind::Struct], TokenKind::Struct.describe())?;
                stream.expect(&[TokenKind::LeftBrace], TokenKind::LeftBrace.describe())?;
                ParseState::InBlock { name, fields: Vec::new() }
            }

            ParseState::InBlock { name, mut fields } => {
                let unterminated = || ConvError::UnterminatedBlock {
                    name:   name.text.clone(),
                    line:   name.line,
                    column: name.column,
                };

                let tok = stream.next_significant().map_err(|e| match e {
                    ConvError::NoMoreTokens => unterminated(),
                    other => other,
                })?;

                if tok.kind == TokenKind::RightBrace {
                    debug!(name = %name.text, fields = fields.len(), "parsed struct");
                    structs.push(StructDesc {
                        name: name.text.clone(),
                        fields,
                    });
                    ParseState::BetweenBlocks
                } else {
                    if tok.kind != TokenKind::Ident {
                        return Err(unexpected(tok, "field name or \"}\""));
                    }
                    let type_tok = stream
                        .expect(&[TokenKind::Ident, TokenKind::TypeAnnotation], "field type")
                        .map_err(|e| match e {
                            ConvError::NoMoreTokens => unterminated(),
                            other => other,
                        })?;

                    let mut field = FieldDesc::new(&tok.text, &type_tok.text);
                    field.backtick_comment = stream.take_trailing(TokenKind::Tag).map(|t| t.text.clone());
                    field.slashed_comment = stream.take_trailing(TokenKind::Comment).map(|t| t.text.clone());
                    fields.push(field);
                    ParseState::InBlock { name, fields }
                }
            }
        };
    }

    Ok(structs)
}
