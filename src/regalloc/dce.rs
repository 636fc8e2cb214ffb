use std::collections::BTreeSet;

use crate::{
  asm::{BlockId, Instr, Temp},
  cfg::Function,
  error::{BackendError, Result},
  pipeline::PassContext,
  regalloc::Liveness,
};

/// An instruction removed by dead code elimination, with the block it lived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eliminated {
  pub block: BlockId,
  pub instr: Instr,
}

pub struct DceOutcome {
  /// Liveness of the final instruction stream
  pub liveness: Liveness,
  /// Removed instructions, in removal order
  pub eliminated: Vec<Eliminated>,
  /// Number of liveness/scan rounds, including the last one that removed nothing
  pub rounds: usize,
}

/// A pure definition whose result nobody reads.
pub fn is_dead(instr: &Instr, live_after: &BTreeSet<Temp>) -> bool {
  match instr.dest() {
    Some(dest) => !instr.has_side_effect() && !live_after.contains(&dest),
    None => false,
  }
}

/// Remove dead definitions until a round finds nothing more to remove.
pub fn eliminate_dead_code(func: &mut Function, ctx: &PassContext) -> Result<DceOutcome> {
  let mut eliminated = vec![];
  let mut rounds = 0;
  loop {
    if rounds >= ctx.max_iterations {
      return Err(BackendError::internal(
        &func.name,
        format!("dead code elimination did not settle within {} rounds", ctx.max_iterations),
        None,
      ));
    }
    rounds += 1;

    let liveness = Liveness::analyze(func, ctx)?;
    let mut removed = 0;
    for block in func.blocks.iter_mut() {
      if !liveness.is_reachable(block.id) {
        continue;
      }
      let instrs = std::mem::take(&mut block.instrs);
      for (idx, instr) in instrs.into_iter().enumerate() {
        if is_dead(&instr, liveness.live_after(block.id, idx)) {
          log::trace!("dce removes {:?} from {}", instr, block.label);
          eliminated.push(Eliminated {
            block: block.id,
            instr,
          });
          removed += 1;
        } else {
          block.instrs.push(instr);
        }
      }
    }

    log::debug!("dce round {} of `{}` removed {} instructions", rounds, func.name, removed);
    if removed == 0 {
      return Ok(DceOutcome {
        liveness,
        eliminated,
        rounds,
      });
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::elaboration::function_from_ir;

  fn ctx() -> PassContext {
    PassContext::default()
  }

  #[test]
  fn removes_exactly_the_unused_value() {
    let mut func = function_from_ir(
      "fn f(t0, t1) {
        t2 <- t0 + t1;
        t3 <- t0 * t1;
        ret t2;
      }",
    );
    let outcome = eliminate_dead_code(&mut func, &ctx()).unwrap();
    assert_eq!(outcome.eliminated.len(), 1);
    assert_eq!(outcome.eliminated[0].instr.dest(), Some(Temp(3)));
    assert_eq!(func.instr_count(), 2);
    let live = &outcome.liveness;
    for (idx, _) in func.blocks[0].instrs.iter().enumerate() {
      assert!(!live.live_after(0, idx).contains(&Temp(3)));
    }
    assert!(!live.live_in(0).contains(&Temp(3)));
  }

  #[test]
  fn chains_of_dead_values_take_several_rounds() {
    let mut func = function_from_ir(
      "fn f(t0) {
        t1 <- t0 + $1;
        t2 <- t1 + $1;
        t3 <- t2 + $1;
        ret t0;
      }",
    );
    let outcome = eliminate_dead_code(&mut func, &ctx()).unwrap();
    let order: Vec<Option<Temp>> = outcome.eliminated.iter().map(|e| e.instr.dest()).collect();
    assert_eq!(order, vec![Some(Temp(3)), Some(Temp(2)), Some(Temp(1))]);
    assert_eq!(outcome.rounds, 4);
    assert_eq!(func.instr_count(), 1);
  }

  #[test]
  fn side_effects_survive() {
    let mut func = function_from_ir(
      "fn f(t0, t1) {
        t2 <- call g(t0);
        t3 <- t0 / t1;
        t4 <- t0 % t1;
        *t0 <- t1;
        ret;
      }",
    );
    let outcome = eliminate_dead_code(&mut func, &ctx()).unwrap();
    assert!(outcome.eliminated.is_empty());
    assert_eq!(func.instr_count(), 5);
  }

  #[test]
  fn loop_initializer_survives() {
    let mut func = function_from_ir(
      "fn f(t0) {
      entry:
        t1 <- $0;
      head:
        if t1 < t0 goto body else done;
      body:
        t1 <- t1 + $1;
        goto head;
      done:
        ret t0;
      }",
    );
    let outcome = eliminate_dead_code(&mut func, &ctx()).unwrap();
    assert!(outcome.eliminated.is_empty());
  }

  #[test]
  fn second_run_removes_nothing() {
    let mut func = function_from_ir(
      "fn f(t0) {
        t1 <- t0 + $1;
        t2 <- -t1;
        t5 <- &t4;
        ret t0;
      }",
    );
    let first = eliminate_dead_code(&mut func, &ctx()).unwrap();
    assert!(first.eliminated.iter().all(|e| !e.instr.has_side_effect()));
    let after_first = func.clone();
    let second = eliminate_dead_code(&mut func, &ctx()).unwrap();
    assert!(second.eliminated.is_empty());
    assert_eq!(second.rounds, 1);
    assert_eq!(
      func.blocks.iter().map(|b| &b.instrs).collect::<Vec<_>>(),
      after_first.blocks.iter().map(|b| &b.instrs).collect::<Vec<_>>()
    );
  }

  #[test]
  fn address_taken_definitions_are_kept() {
    let mut func = function_from_ir(
      "fn f() {
        t0 <- $7;
        t1 <- &t0;
        call g(t1);
        ret;
      }",
    );
    let outcome = eliminate_dead_code(&mut func, &ctx()).unwrap();
    assert!(outcome.eliminated.is_empty());
  }

  #[test]
  fn round_watchdog_trips() {
    // liveness settles in one pass, but the removal forces a second round
    let mut func = function_from_ir(
      "fn f() {
        t0 <- $1;
        t1 <- t0 + $2;
        ret;
      }",
    );
    let ctx = PassContext {
      max_iterations: 1,
      ..PassContext::default()
    };
    let err = eliminate_dead_code(&mut func, &ctx).err().unwrap();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("dead code elimination"));
  }
}
