//! Parser for the supported `OpenQASM` surface.

mod expression;
mod lowering;
mod statement;

use std::io::Read;
use std::path::Path;

use alsvid_ir::Circuit;

use crate::ast::Program;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a QASM source string into a [`Circuit`].
pub fn parse(source: &str) -> ParseResult<Circuit> {
    let mut parser = Parser::new(source)?;
    let program = parser.parse_program()?;
    lowering::lower_to_circuit(&program)
}

/// Parse a QASM source string into a CST [`Program`].
pub fn parse_ast(source: &str) -> ParseResult<Program> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Read a whole QASM source from a reader and parse it.
pub fn parse_reader<R: Read>(mut reader: R) -> ParseResult<Circuit> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse(&source)
}

/// Read a QASM file and parse it.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Circuit> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}

/// Parser state: a token cursor over the lexed source.
pub(super) struct Parser<'a> {
    source: &'a str,
    pub(super) tokens: Vec<SpannedToken>,
    pub(super) pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser from source.
    fn new(source: &'a str) -> ParseResult<Self> {
        let token_results = tokenize(source);
        let mut tokens = Vec::new();

        for result in token_results {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, msg)) => {
                    return Err(ParseError::LexerError {
                        position: span.start,
                        message: msg,
                    });
                }
            }
        }

        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    /// Check if we've reached the end.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Byte offset of the current token, for diagnostics.
    pub(super) fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or_else(
            || self.tokens.last().map_or(0, |t| t.span.end),
            |t| t.span.start,
        )
    }

    /// Peek at the current token.
    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Advance and return the current token.
    pub(super) fn advance(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        let token = self.tokens[self.pos].token.clone();
        self.pos += 1;
        Some(token)
    }

    /// Expect a specific token.
    #[allow(clippy::needless_pass_by_value)]
    pub(super) fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let position = self.position();
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;

        if std::mem::discriminant(&found) != std::mem::discriminant(&expected) {
            return Err(ParseError::UnexpectedToken {
                position,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Check if current token matches.
    pub(super) fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    /// Consume token if it matches.
    pub(super) fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Parse the entire program.
    fn parse_program(&mut self) -> ParseResult<Program> {
        // The version header is optional; programs distilled from QASM 2
        // sources often omit it.
        let version = if self.consume(&Token::OpenQasm) {
            let version = self.parse_version()?;
            self.expect(Token::Semicolon)?;
            Some(version)
        } else {
            None
        };

        let mut statements = Vec::new();
        while !self.is_eof() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program {
            version,
            statements,
        })
    }

    /// Parse the version number, keeping the raw token text so `3.0` is
    /// recorded as written rather than reformatted.
    fn parse_version(&mut self) -> ParseResult<String> {
        let Some(spanned) = self.tokens.get(self.pos) else {
            return Err(ParseError::UnexpectedEof("version number".into()));
        };
        match &spanned.token {
            Token::FloatLiteral(_) | Token::IntLiteral(_) => {
                let text = self.source[spanned.span.clone()].to_string();
                self.pos += 1;
                Ok(text)
            }
            other => Err(ParseError::InvalidVersion(other.to_string())),
        }
    }

    /// Parse an identifier.
    pub(super) fn parse_identifier(&mut self) -> ParseResult<String> {
        let position = self.position();
        match self.advance() {
            Some(Token::Identifier(s)) => Ok(s),
            Some(other) => Err(ParseError::UnexpectedToken {
                position,
                expected: "identifier".into(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("identifier".into())),
        }
    }
}
