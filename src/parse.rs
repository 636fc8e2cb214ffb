//! Parser
// We rely on [lalrpop](https://github.com/lalrpop/lalrpop) for parsing.
// Lalrpop generates a LR(1) parser, the grammar can be found in irtext.lalrpop
// and the generated code in irtext.rs

pub mod parser {
  use lalrpop_util::ParseError;
  use logos::{Logos, Span};

  use crate::ast::SurfaceProgram;
  use crate::error::{BackendError, Result};
  use crate::irtext;
  use crate::lex::Token;

  /// Name reported for errors that cannot be pinned to one function
  pub const INPUT: &str = "<input>";

  fn line_col(input: &str, offset: usize) -> (usize, usize) {
    let before = &input[..offset.min(input.len())];
    let line = before.matches('\n').count() + 1;
    let col = before.len() - before.rfind('\n').map_or(0, |i| i + 1) + 1;
    (line, col)
  }

  fn describe(input: &str, err: ParseError<usize, Token<'_>, &'static str>) -> String {
    match err {
      ParseError::InvalidToken { location } => {
        let (line, col) = line_col(input, location);
        format!("invalid token at {}:{}", line, col)
      }
      ParseError::UnrecognizedEof { location, expected } => {
        let (line, col) = line_col(input, location);
        format!("unexpected end of input at {}:{}, expected one of {}", line, col, expected.join(" "))
      }
      ParseError::UnrecognizedToken {
        token: (start, tok, end),
        expected,
      } => {
        let (line, col) = line_col(input, start);
        format!(
          "unexpected {} `{}` at {}:{}, expected one of {}",
          tok.as_ref(),
          &input[start..end],
          line,
          col,
          expected.join(" ")
        )
      }
      ParseError::ExtraToken {
        token: (start, tok, _),
      } => {
        let (line, col) = line_col(input, start);
        format!("extra token {} at {}:{}", tok.as_ref(), line, col)
      }
      ParseError::User { error } => error.to_string(),
    }
  }

  pub fn parse_string(input: &str) -> Result<SurfaceProgram> {
    let lex_stream = Token::lexer(input)
      .spanned()
      .map(|(t, y): (Token, Span)| (y.start, t, y.end));

    irtext::SurfaceProgramParser::new()
      .parse(lex_stream)
      .map_err(|e| BackendError::malformed(INPUT, format!("couldn't parse: {}", describe(input, e))))
  }

  #[cfg(test)]
  mod tests {
    use super::*;
    use crate::asm::{BinOp, Cond, Operand, Temp};
    use crate::ast::{Rhs, SurfaceInstr, SurfaceLine};

    #[test]
    fn parses_the_full_instruction_set() {
      let program = parse_string(
        "fn name(t0: %rdi, t1) {
        entry:
          t2 <- t0 + t1;
          t3 <- $5;
          t4 <- call f(t2, t3);
          call g();
          *t2 <- t4;
          t5 <- *t2;
          t6 <- &t3;
          t7 <- -t6;
          t8 <- spill_load slot0;
          spill_store slot1 <- t8;
          t9 <- &slot1;
          if t2 < t3 goto body else exit;
        body:
          goto entry;
        exit:
          ret t2;
        }
        fn empty() { ret; }",
      )
      .unwrap();

      assert_eq!(program.len(), 2);
      let f = &program[0];
      assert_eq!(f.params[0].reg.as_deref(), Some("%rdi"));
      assert_eq!(f.params[1].reg, None);
      assert_eq!(f.num_instrs(), 14);
      assert_eq!(f.body[0], SurfaceLine::Label("entry".to_string()));
      assert_eq!(
        f.body[1],
        SurfaceLine::Instr(SurfaceInstr::Assign(
          Temp(2),
          Rhs::Binary(BinOp::Add, Operand::Temp(Temp(0)), Operand::Temp(Temp(1)))
        ))
      );
      assert_eq!(
        f.body[12],
        SurfaceLine::Instr(SurfaceInstr::If(
          Cond::BinOp(Operand::Temp(Temp(2)), BinOp::Lt, Operand::Temp(Temp(3))),
          "body".to_string(),
          "exit".to_string()
        ))
      );
      assert_eq!(program[1].num_instrs(), 1);
    }

    #[test]
    fn errors_carry_a_position() {
      let err = parse_string("fn f() {\n  t1 <- t2 +;\n}").unwrap_err();
      let msg = err.to_string();
      assert!(msg.contains("2:"), "{}", msg);
      assert!(!err.is_fatal());
    }

    #[test]
    fn empty_input_is_an_empty_program() {
      assert!(parse_string("// nothing here\n").unwrap().is_empty());
    }
  }
}
