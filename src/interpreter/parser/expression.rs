use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses the prefix form the current token starts.
    ///
    /// Covers literals, identifiers, the prefix operators `!` and `-`,
    /// parenthesized groups, `if` expressions, function literals, array
    /// literals and hash literals.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let (token, line) = self.next_token()?;

        match token {
            Token::Identifier(name) => Ok(Expr::Identifier { name }),
            Token::Integer(value) => Ok(Expr::IntegerLiteral { value }),
            Token::Str(value) => Ok(Expr::StringLiteral { value }),
            Token::Bool(value) => Ok(Expr::BooleanLiteral { value }),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            Token::LParen => {
                let expr = self.parse_expression(Precedence::Lowest)?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            },
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => {
                let elements =
                    self.parse_comma_separated(|parser| parser.parse_expression(Precedence::Lowest),
                                               &Token::RBracket)?;
                Ok(Expr::ArrayLiteral { elements })
            },
            Token::LBrace => self.parse_hash_literal(),
            token => {
                Err(ParseError::UnexpectedToken { token: format!("No expression starts with {token:?}"),
                                                  line })
            },
        }
    }

    /// Parses the infix form the current token continues `left` with.
    ///
    /// `(` extends `left` into a call, `[` into an index expression, and
    /// binary operator tokens into an operator application whose right
    /// operand is parsed at the operator's own precedence, producing
    /// left-associative trees.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        let (token, line) = self.next_token()?;

        match token {
            Token::LParen => {
                let arguments =
                    self.parse_comma_separated(|parser| parser.parse_expression(Precedence::Lowest),
                                               &Token::RParen)?;
                Ok(Expr::Call { callee: Box::new(left),
                                arguments })
            },
            Token::LBracket => {
                let index = self.parse_expression(Precedence::Lowest)?;
                self.expect(&Token::RBracket)?;
                Ok(Expr::Index { left:  Box::new(left),
                                 index: Box::new(index), })
            },
            token => {
                let precedence = Precedence::of(&token);
                let Some(operator) = token_to_infix_operator(&token) else {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected an operator, found {token:?}"),
                                                             line });
                };

                let right = self.parse_expression(precedence)?;
                Ok(Expr::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
            },
        }
    }

    /// Parses the operand of a prefix operator and wraps it.
    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> ParseResult<Expr> {
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix { operator,
                          right: Box::new(right) })
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax: `if ( <condition> ) { <consequence> } (else { <alternative> })?`
    ///
    /// Parentheses around the condition and braces around both branches
    /// are required.
    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(&Token::RParen)?;

        let consequence = self.parse_block()?;

        let alternative = match self.current() {
            Some((Token::Else, _)) => {
                self.advance();
                Some(self.parse_block()?)
            },
            _ => None,
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses a function literal: `fn ( <params> ) { <body> }`
    ///
    /// The parameter list is a possibly-empty comma-separated list of
    /// identifiers.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let parameters = self.parse_comma_separated(Self::parse_identifier, &Token::RParen)?;
        let body = self.parse_block()?;

        Ok(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a hash literal: `{ <key> : <value> , … }`
    ///
    /// Keys are arbitrary expressions; non-hashable keys fail at
    /// evaluation time, not here.
    fn parse_hash_literal(&mut self) -> ParseResult<Expr> {
        let pairs = self.parse_comma_separated(|parser| {
                                                   let key =
                                                       parser.parse_expression(Precedence::Lowest)?;
                                                   parser.expect(&Token::Colon)?;
                                                   let value =
                                                       parser.parse_expression(Precedence::Lowest)?;
                                                   Ok((key, value))
                                               },
                                               &Token::RBrace)?;

        Ok(Expr::HashLiteral { pairs })
    }

    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by array literals, call argument lists,
    /// parameter lists and hash literals. It repeatedly calls
    /// `parse_item` to parse one element, expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list (e.g., `]` or `)`).
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        closing: &Token)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        if let Some((token, _)) = self.current()
           && token == closing
        {
            self.advance();
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            match self.current() {
                Some((Token::Comma, _)) => self.advance(),
                Some((token, _)) if token == closing => {
                    self.advance();
                    break;
                },
                Some((token, line)) => {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {token:?}"),
                                                             line:  *line, });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line: self.last_line() }),
            }
        }

        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.next_token()? {
            (Token::Identifier(name), _) => Ok(name),
            (token, line) => {
                Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {token:?}"),
                                                  line })
            },
        }
    }
}

/// Maps a token to its corresponding infix operator.
///
/// Returns `Some(InfixOperator)` when the token represents a binary
/// operator, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(InfixOperator)` if the token corresponds to an infix operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use canopy::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::expression::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::Plus),
///            Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
