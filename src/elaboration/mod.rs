mod elab;
pub use elab::elab_function;

use crate::{ast::SurfaceProgram, cfg::Function, error::Result};

/// Elaborate every function of a program. Each function succeeds or fails on its own.
pub fn elab_program(program: SurfaceProgram, precolor_params: bool) -> Vec<(String, Result<Function>)> {
  program
    .into_iter()
    .map(|surface| (surface.name.clone(), elab_function(surface, precolor_params)))
    .collect()
}

/// Parse and elaborate the first function of `src`. Panics on bad input.
#[cfg(test)]
pub fn function_from_ir(src: &str) -> Function {
  let mut program = crate::parse::parser::parse_string(src).unwrap();
  assert!(!program.is_empty(), "no function in test input");
  elab_function(program.remove(0), false).unwrap()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    asm::{Instr, Temp},
    error::BackendError,
    parse::parser::parse_string,
  };

  fn elab(src: &str, precolor: bool) -> Result<Function> {
    let mut program = parse_string(src).unwrap();
    elab_function(program.remove(0), precolor)
  }

  fn reason(err: BackendError) -> String {
    match err {
      BackendError::MalformedIr { reason, .. } => reason,
      other => panic!("expected malformed IR, got {}", other),
    }
  }

  #[test]
  fn blocks_split_at_labels_and_terminators() {
    let func = elab(
      "fn f(t0) {
        t1 <- t0;
        if t1 goto a else b;
        t2 <- $1;
      a:
        ret t1;
      b:
        goto a;
      }",
      false,
    )
    .unwrap();
    let labels: Vec<&str> = func.blocks.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["f.entry", ".f.1", "a", "b"]);
    assert_eq!(func.block(0).succs, vec![2, 3]);
    // the anonymous block falls through into `a`
    assert_eq!(func.block(1).succs, vec![2]);
    assert_eq!(func.block(3).instrs, vec![Instr::Jmp { target: 2 }]);
  }

  #[test]
  fn leading_label_names_the_entry() {
    let func = elab("fn f() { start: ret; }", false).unwrap();
    assert_eq!(func.blocks.len(), 1);
    assert_eq!(func.block(0).label, "start");
  }

  #[test]
  fn malformed_functions() {
    assert!(reason(elab("fn f() { goto nowhere; }", false).unwrap_err()).contains("nowhere"));
    assert!(reason(elab("fn f() { a: ret; a: ret; }", false).unwrap_err()).contains("duplicate label"));
    assert!(reason(elab("fn f() { }", false).unwrap_err()).contains("no instructions"));
    assert!(reason(elab("fn f(t0, t0) { ret; }", false).unwrap_err()).contains("duplicate parameter"));
    assert!(reason(elab("fn f(t0: %xmm0) { ret; }", false).unwrap_err()).contains("unknown register"));
    assert!(reason(elab("fn f(t0: %rsp) { ret; }", false).unwrap_err()).contains("allocatable"));
  }

  #[test]
  fn parameters_pinned_to_argument_registers() {
    let func = elab("fn f(t0, t1: %rax, t2) { ret t0; }", true).unwrap();
    // %rdi, %rax, %rdx
    assert_eq!(func.precolored[&Temp(0)], 1);
    assert_eq!(func.precolored[&Temp(1)], 0);
    assert_eq!(func.precolored[&Temp(2)], 3);

    let plain = elab("fn f(t0, t1: %rax, t2) { ret t0; }", false).unwrap();
    assert_eq!(plain.precolored.len(), 1);
  }

  #[test]
  fn textual_slots_are_reserved() {
    let func = elab("fn f() { t0 <- spill_load slot2; ret t0; }", false).unwrap();
    assert_eq!(func.num_slots, 3);
  }

  #[test]
  fn program_elaborates_each_function() {
    let program = parse_string("fn ok() { ret; } fn bad() { goto x; }").unwrap();
    let funcs = elab_program(program, false);
    assert!(funcs[0].1.is_ok());
    assert!(funcs[1].1.is_err());
    assert_eq!(funcs[1].0, "bad");
  }
}
