use logos::Logos;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{LexerExtras, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an expression position, from weakest to strongest.
///
/// The Pratt loop keeps extending an expression to the right as long as
/// the next operator binds tighter than the position it is parsing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The default; also the strength of every non-operator token.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// The `(` of a call expression.
    Call,
    /// The `[` of an index expression.
    Index,
}

impl Precedence {
    /// Returns the binding strength of `token` in infix position.
    ///
    /// Tokens that cannot continue an expression — including the `;`
    /// statement terminator — report [`Precedence::Lowest`], which makes
    /// the expression loop stop in front of them.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::{lexer::Token, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(&Token::Star) > Precedence::of(&Token::Plus));
    /// assert_eq!(Precedence::of(&Token::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(token: &Token) -> Self {
        match token {
            Token::EqualEqual | Token::BangEqual => Self::Equals,
            Token::Less | Token::Greater => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Star | Token::Slash => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// A Pratt parser over the token stream of one source text.
///
/// The parser owns the lexed tokens (each paired with its source line),
/// a cursor into them, and the list of diagnostics collected so far.
/// Lexing happens eagerly in [`Parser::new`]; unrecognized input bytes
/// become diagnostics immediately and are dropped from the stream.
pub struct Parser {
    tokens:   Vec<(Token, usize)>,
    position: usize,
    errors:   Vec<String>,
}

impl Parser {
    /// Lexes `source` and prepares a parser over its tokens.
    ///
    /// # Parameters
    /// - `source`: The program text.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(token) = lexer.next() {
            match token {
                Ok(Token::NewLine) => {},
                Ok(token) => tokens.push((token, lexer.extras.line)),
                Err(()) => {
                    errors.push(ParseError::IllegalToken { token: lexer.slice().to_string(),
                                                           line:  lexer.extras.line, }.to_string());
                },
            }
        }

        Self { tokens,
               position: 0,
               errors }
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Parsing never aborts: when a statement fails, its diagnostic is
    /// recorded, the parser skips ahead to the next plausible statement
    /// start, and parsing continues. Callers must check [`Parser::errors`]
    /// before evaluating the returned program.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::parser::core::Parser;
    ///
    /// let mut parser = Parser::new("let x = 1 + 2;");
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "let x = (1 + 2);");
    /// ```
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current().is_some() {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    self.errors.push(error.to_string());
                    self.synchronize();
                },
            }
        }

        program
    }

    /// Returns the diagnostics collected while lexing and parsing.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Parses one expression at the given precedence level.
    ///
    /// Reads a prefix form first, then folds infix forms onto it from the
    /// left for as long as the next token binds tighter than `precedence`.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while let Some((token, _)) = self.current() {
            if precedence >= Precedence::of(token) {
                break;
            }
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Skips ahead to the next plausible statement boundary.
    ///
    /// Consumes tokens up to and including the next `;`, or stops in
    /// front of the next statement-starting keyword, whichever comes
    /// first.
    fn synchronize(&mut self) {
        while let Some((token, _)) = self.current() {
            match token {
                Token::Semicolon => {
                    self.advance();
                    return;
                },
                Token::Let | Token::Return | Token::For => return,
                _ => self.advance(),
            }
        }
    }

    /// The token under the cursor, if any.
    pub(in crate::interpreter::parser) fn current(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.position)
    }

    /// The token one past the cursor, if any.
    pub(in crate::interpreter::parser) fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.position + 1)
    }

    /// Moves the cursor past the current token.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.position += 1;
    }

    /// Takes the current token, or fails at end of input.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> ParseResult<(Token, usize)> {
        match self.tokens.get(self.position) {
            Some(entry) => {
                let entry = entry.clone();
                self.position += 1;
                Ok(entry)
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: self.last_line() }),
        }
    }

    /// Consumes the current token if it equals `expected`, failing
    /// otherwise.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        match self.tokens.get(self.position) {
            Some((token, _)) if token == expected => {
                self.position += 1;
                Ok(())
            },
            Some((token, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {token:?}"),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line: self.last_line() }),
        }
    }

    /// The line of the last token, for end-of-input diagnostics.
    pub(in crate::interpreter::parser) fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |(_, line)| *line)
    }
}
