#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    Var,
    Not,
    And,
    Xor,
    Or,
    Eof,
}

impl TokenKind {
    // Token-type spellings used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Var => "variable",
            TokenKind::Not => "!",
            TokenKind::And => "&",
            TokenKind::Xor => "^",
            TokenKind::Or => "|",
            TokenKind::Eof => "EOF",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedCharacter { ch: char, pos: usize },
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }

        if self.pos >= self.chars.len() {
            return Ok(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                pos: self.chars.len(),
            });
        }

        let ch = self.chars[self.pos];
        let pos = self.pos;

        if let Some(kind) = single_char_kind(ch) {
            self.pos += 1;
            return Ok(Token {
                kind,
                lexeme: ch.to_string(),
                pos,
            });
        }

        if ch.is_alphanumeric() {
            return Ok(self.consume_variable());
        }

        Err(LexError::UnexpectedCharacter { ch, pos })
    }

    fn consume_variable(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.chars.len() && self.chars[self.pos].is_alphanumeric() {
            self.pos += 1;
        }
        Token {
            kind: TokenKind::Var,
            lexeme: self.chars[start..self.pos].iter().collect(),
            pos: start,
        }
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn single_char_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '!' => TokenKind::Not,
        '&' => TokenKind::And,
        '^' => TokenKind::Xor,
        '|' => TokenKind::Or,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
