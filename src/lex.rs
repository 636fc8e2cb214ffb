//! Lexer for the textual three-address IR.
// This project relies on logos 0.12.1 see docs [here]
// (https://docs.rs/logos/0.12.1/logos/index.html)

use std::fmt;

use enum_as_inner::EnumAsInner;
use logos::{Lexer, Logos};
use strum_macros::AsRefStr;

// Index after a fixed alphabetic prefix, as in `t12` or `slot3`
fn from_index<'a>(lex: &mut Lexer<'a, Token<'a>>, prefix: usize) -> Result<u32, String> {
  let slice = lex.slice();
  slice[prefix..]
    .parse::<u32>()
    .map_err(|e| format!("bad index in `{}`: {}", slice, e))
}

fn from_temp<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Result<u32, String> {
  from_index(lex, 1)
}

fn from_slot<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Result<u32, String> {
  from_index(lex, "slot".len())
}

// Immediates are written `$42` or `$-7`
fn from_imm<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Result<i64, String> {
  let slice = lex.slice();
  slice[1..]
    .parse::<i64>()
    .map_err(|e| format!("immediate {} out of range: {}", slice, e))
}

impl<'a> fmt::Display for Token<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:?}", self)
  }
}

#[derive(Clone, Logos, Debug, PartialEq, AsRefStr, EnumAsInner)]
pub enum Token<'a> {
  #[regex(r"[A-Za-z_.][A-Za-z0-9_.]*")]
  Ident(&'a str),
  #[regex(r"t[0-9]+", priority = 10, callback = from_temp)]
  Temp(u32),
  #[regex(r"slot[0-9]+", priority = 10, callback = from_slot)]
  Slot(u32),
  // `%` followed by a letter is a register, so the modulus operator needs a space after it
  #[regex(r"%[a-z][a-z0-9]*")]
  Reg(&'a str),
  #[regex(r"\$-?[0-9]+", from_imm)]
  Imm(i64),

  #[token("<-")]
  Arrow,
  #[token("-")]
  Minus,
  #[token("+")]
  Plus,
  #[token("*")]
  Asterisk,
  #[token("/")]
  Div,
  #[token("%")]
  Mod,
  #[token("<")]
  LessThan,
  #[token(">")]
  GreaterThan,
  #[token("<=")]
  Leq,
  #[token(">=")]
  Geq,
  #[token("==")]
  Eq,
  #[token("!=")]
  Neq,
  #[token("&")]
  BitAnd,
  #[token("^")]
  BitXor,
  #[token("|")]
  BitOr,
  #[token("<<")]
  Shl,
  #[token(">>")]
  Shr,
  #[token("!")]
  Not,
  #[token("~")]
  BitNot,
  #[token("(")]
  LParen,
  #[token(")")]
  RParen,
  #[token("{")]
  LBrace,
  #[token("}")]
  RBrace,
  #[token(";")]
  Semicolon,
  #[token(",")]
  Comma,
  #[token(":")]
  Colon,

  // Reserved Keywords
  #[token("fn")]
  Fn,
  #[token("call")]
  Call,
  #[token("goto")]
  Goto,
  #[token("if")]
  If,
  #[token("else")]
  Else,
  #[token("ret")]
  Ret,
  #[token("spill_load")]
  SpillLoad,
  #[token("spill_store")]
  SpillStore,

  #[error]
  #[regex(r"[ \t\n\v\r\f]+", logos::skip)] // Whitespace
  #[regex(r#"(//)[^\n]*"#, logos::skip)] // Single line comment
  Error,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lex(src: &str) -> Vec<Token<'_>> {
    Token::lexer(src).collect()
  }

  #[test]
  fn temps_beat_identifiers() {
    assert_eq!(
      lex("t12 tail slot3 slots"),
      vec![
        Token::Temp(12),
        Token::Ident("tail"),
        Token::Slot(3),
        Token::Ident("slots")
      ]
    );
  }

  #[test]
  fn arrows_and_comparisons() {
    assert_eq!(
      lex("t1 <- t2 <= $-4 << t3 < t4"),
      vec![
        Token::Temp(1),
        Token::Arrow,
        Token::Temp(2),
        Token::Leq,
        Token::Imm(-4),
        Token::Shl,
        Token::Temp(3),
        Token::LessThan,
        Token::Temp(4)
      ]
    );
  }

  #[test]
  fn registers_and_modulus() {
    assert_eq!(
      lex("t0: %rdi t1 % t2"),
      vec![
        Token::Temp(0),
        Token::Colon,
        Token::Reg("%rdi"),
        Token::Temp(1),
        Token::Mod,
        Token::Temp(2)
      ]
    );
  }

  #[test]
  fn comments_and_keywords() {
    let toks = lex("// header\nfn f() { ret; } // trailing");
    assert_eq!(toks[0], Token::Fn);
    assert_eq!(toks[1], Token::Ident("f"));
    assert_eq!(toks[5], Token::Ret);
    assert_eq!(toks.len(), 8);
  }

  #[test]
  fn junk_is_an_error_token() {
    assert!(lex("t1 <- #").contains(&Token::Error));
  }
}
