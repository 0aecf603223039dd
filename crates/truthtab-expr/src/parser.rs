use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::lexer::{LexError, Lexer, Token, TokenKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("unexpected token at {pos}: expected {expected}, got {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        pos: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpr {
    pub root: Expr,
    pub variables: Vec<String>,
}

pub struct Parser {
    lexer: Lexer,
    current: Token,
    variables: Vec<String>,
}

pub fn parse_expression(input: &str) -> Result<ParsedExpr, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            variables: Vec::new(),
        })
    }

    pub fn parse(mut self) -> Result<ParsedExpr, ParseError> {
        let root = self.parse_or()?;
        self.expect(TokenKind::Eof)?;
        Ok(ParsedExpr {
            root,
            variables: self.variables,
        })
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_xor()?;
        while self.match_kind(TokenKind::Or)? {
            let right = self.parse_xor()?;
            node = binary(node, BinaryOp::Or, right);
        }
        Ok(node)
    }

    fn parse_xor(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_and()?;
        while self.match_kind(TokenKind::Xor)? {
            let right = self.parse_and()?;
            node = binary(node, BinaryOp::Xor, right);
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;
        while self.match_kind(TokenKind::And)? {
            let right = self.parse_factor()?;
            node = binary(node, BinaryOp::And, right);
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        if self.match_kind(TokenKind::Not)? {
            let expr = self.parse_factor()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                expr: Box::new(expr),
            });
        }

        if self.check(TokenKind::Var) {
            let token = self.advance()?;
            let id = self.intern_variable(token.lexeme.as_str());
            return Ok(Expr::Variable {
                name: token.lexeme,
                id,
            });
        }

        if self.match_kind(TokenKind::LParen)? {
            let node = self.parse_or()?;
            self.expect(TokenKind::RParen)?;
            return Ok(node);
        }

        Err(ParseError::UnexpectedToken {
            expected: "factor".to_string(),
            found: self.current.kind.name().to_string(),
            pos: self.current.pos,
        })
    }

    fn intern_variable(&mut self, name: &str) -> usize {
        match self.variables.iter().position(|known| known == name) {
            Some(id) => id,
            None => {
                self.variables.push(name.to_string());
                self.variables.len() - 1
            }
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind.name().to_string(),
                found: self.current.kind.name().to_string(),
                pos: self.current.pos,
            })
        }
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
