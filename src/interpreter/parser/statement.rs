use crate::{
    ast::{Block, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable declaration (`let x = …`),
    /// - a return statement (`return …`),
    /// - a loop (`for i, v in … { … }`),
    /// - a rebinding (`x = …`), recognized by two-token lookahead,
    /// - an expression statement, which is promoted to an indexed
    ///   assignment when an index expression is followed by `=`.
    ///
    /// Trailing semicolons are optional everywhere they are meaningful.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current() {
            Some((Token::Let, _)) => self.parse_let_statement(),
            Some((Token::Return, _)) => self.parse_return_statement(),
            Some((Token::For, _)) => self.parse_for_statement(),
            Some((Token::Identifier(_), _))
                if matches!(self.peek(), Some((Token::Assign, _))) =>
            {
                self.parse_assign_statement()
            },
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a variable declaration: `let <identifier> = <expression> ;?`
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let name = self.parse_identifier()?;
        self.expect(&Token::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses a return statement: `return <expression> ;?`
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_semicolon();

        Ok(Statement::Return { value })
    }

    /// Parses a rebinding: `<identifier> = <expression> ;?`
    ///
    /// Only called when the two-token lookahead saw `IDENT =`, so the
    /// leading identifier is known to be present.
    fn parse_assign_statement(&mut self) -> ParseResult<Statement> {
        let name = self.parse_identifier()?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_semicolon();

        Ok(Statement::Assign { name, value })
    }

    /// Parses a loop: `for <index> , <value> in <expression> { … }`
    ///
    /// The first identifier receives the element index (or hash key), the
    /// second the element itself.
    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let index = self.parse_identifier()?;
        self.expect(&Token::Comma)?;
        let value = self.parse_identifier()?;
        self.expect(&Token::In)?;
        let iterable = self.parse_expression(Precedence::Lowest)?;
        let body = self.parse_block()?;
        self.consume_semicolon();

        Ok(Statement::For { index,
                            value,
                            iterable,
                            body })
    }

    /// Parses an expression statement, promoting `index = value` forms.
    ///
    /// When the parsed expression is an index expression and the next
    /// token is `=`, the whole statement becomes an indexed assignment;
    /// `=` after any other expression is a syntax error.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if let Some((Token::Assign, line)) = self.current() {
            let line = *line;
            self.advance();

            let value = self.parse_expression(Precedence::Lowest)?;
            self.consume_semicolon();

            return match expr {
                Expr::Index { left, index } => Ok(Statement::IndexAssign { target: *left,
                                                                           index: *index,
                                                                           value }),
                other => {
                    Err(ParseError::UnexpectedToken { token: format!("Expected an index expression before '=', found {other}"),
                                                      line })
                },
            };
        }

        self.consume_semicolon();
        Ok(Statement::Expression { expr })
    }

    /// Parses a brace-delimited block of statements.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect(&Token::LBrace)?;

        let mut statements = Vec::new();
        loop {
            match self.current() {
                Some((Token::RBrace, _)) => {
                    self.advance();
                    break;
                },
                Some(_) => statements.push(self.parse_statement()?),
                None => return Err(ParseError::UnexpectedEndOfInput { line: self.last_line() }),
            }
        }

        Ok(Block { statements })
    }

    /// Consumes an optional trailing semicolon.
    fn consume_semicolon(&mut self) {
        if let Some((Token::Semicolon, _)) = self.current() {
            self.advance();
        }
    }
}
