use super::{tokenize, LexError, Lexer, TokenKind};

#[test]
fn tokenizes_composite_expression() {
    let tokens = tokenize("a & (b | !a) ^ x0").expect("tokenize");
    let kinds = tokens.into_iter().map(|token| token.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::And,
            TokenKind::LParen,
            TokenKind::Var,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Var,
            TokenKind::RParen,
            TokenKind::Xor,
            TokenKind::Var,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn variable_token_carries_its_name_and_offset() {
    let tokens = tokenize("foo42 & b").expect("tokenize");
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[0].lexeme, "foo42");
    assert_eq!(tokens[0].pos, 0);
    assert_eq!(tokens[2].lexeme, "b");
    assert_eq!(tokens[2].pos, 8);
}

#[test]
fn skips_whitespace_between_tokens() {
    let tokens = tokenize("  a \t & \n b ").expect("tokenize");
    let kinds = tokens.into_iter().map(|token| token.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![TokenKind::Var, TokenKind::And, TokenKind::Var, TokenKind::Eof]
    );
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().expect("token").kind, TokenKind::Var);
    assert_eq!(lexer.next_token().expect("token").kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().expect("token").kind, TokenKind::Eof);
}

#[test]
fn rejects_unknown_character() {
    let error = tokenize("a # b").expect_err("must fail");
    assert_eq!(error, LexError::UnexpectedCharacter { ch: '#', pos: 2 });
}
