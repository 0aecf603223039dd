pub mod ast;
pub mod calculator;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use calculator::{Calculator, EvalError, Row, MAX_VARIABLES};
pub use lexer::{tokenize, LexError, Lexer, Token, TokenKind};
pub use parser::{parse_expression, ParseError, ParsedExpr, Parser};
