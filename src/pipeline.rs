//! Per-function driver of the backend passes.
//!
//! liveness -> DCE (until stable) -> interference graph -> coloring,
//! and on any spill: rewrite the stream and start over.

use std::collections::BTreeMap;

use crate::{
  asm::{SlotId, Temp},
  cfg::Function,
  error::{BackendError, Result},
  regalloc::{
    color_graph, eliminate_dead_code, rewrite_spills, AllocEvent, ColorAssignment, Eliminated,
    InterferenceGraph, Liveness, Location, SpillCosts,
  },
};

/// Settings threaded through every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassContext {
  /// K, the number of registers available for coloring
  pub num_colors: usize,
  pub dead_code_elim: bool,
  /// Watchdog for every fixpoint loop
  pub max_iterations: usize,
  /// Bound on allocation restarts; defaults to the number of temps plus one
  pub max_rounds: Option<usize>,
}

impl Default for PassContext {
  fn default() -> Self {
    PassContext {
      num_colors: 4,
      dead_code_elim: true,
      max_iterations: 10_000,
      max_rounds: None,
    }
  }
}

impl PassContext {
  pub fn validate(&self) -> Result<()> {
    if self.num_colors < 1 {
      return Err(BackendError::config("number of colors must be at least 1"));
    }
    if self.max_iterations < 1 {
      return Err(BackendError::config("max_iterations must be at least 1"));
    }
    Ok(())
  }
}

/// What happened in one round of the allocation loop.
#[derive(Debug, Clone)]
pub struct RoundReport {
  pub round: usize,
  pub liveness_passes: usize,
  pub eliminated: Vec<Eliminated>,
  pub nodes: usize,
  pub edges: usize,
  pub trace: Vec<AllocEvent>,
  /// Temps spilled in this round and their slots
  pub spilled: BTreeMap<Temp, SlotId>,
}

/// Final result of register allocation for one function.
#[derive(Debug, Clone)]
pub struct Allocation {
  /// The function after DCE and spill rewriting
  pub function: Function,
  pub assignment: ColorAssignment,
  pub rounds: Vec<RoundReport>,
  /// Unreachable blocks dropped before the first round
  pub pruned_blocks: usize,
}

impl Allocation {
  pub fn num_spilled(&self) -> usize {
    self.rounds.iter().map(|r| r.spilled.len()).sum()
  }

  /// Every instruction DCE removed, over all rounds.
  pub fn eliminated(&self) -> impl Iterator<Item = &Eliminated> {
    self.rounds.iter().flat_map(|r| r.eliminated.iter())
  }
}

/// Liveness and dead code elimination for the diagnostic modes.
pub fn run_dce(func: &mut Function, ctx: &PassContext) -> Result<(Liveness, Vec<Eliminated>)> {
  ctx.validate()?;
  if ctx.dead_code_elim {
    let outcome = eliminate_dead_code(func, ctx)?;
    Ok((outcome.liveness, outcome.eliminated))
  } else {
    Ok((Liveness::analyze(func, ctx)?, vec![]))
  }
}

/// Allocate registers for `func` with `ctx.num_colors` colors.
pub fn allocate(mut func: Function, ctx: &PassContext) -> Result<Allocation> {
  ctx.validate()?;
  let k = ctx.num_colors;

  let pruned_blocks = func.prune_unreachable();
  if pruned_blocks > 0 {
    log::info!("dropped {} unreachable blocks of `{}`", pruned_blocks, func.name);
  }

  let max_rounds = ctx
    .max_rounds
    .unwrap_or_else(|| func.all_temps().len() + 1);
  let mut slots: BTreeMap<Temp, SlotId> = BTreeMap::new();
  let mut rounds = vec![];

  loop {
    let round = rounds.len() + 1;
    if round > max_rounds {
      return Err(BackendError::internal(
        &func.name,
        format!("allocation did not settle within {} rounds", max_rounds),
        None,
      ));
    }

    let (liveness, eliminated) = run_dce(&mut func, ctx)?;
    let igraph = InterferenceGraph::build(&func, &liveness);
    igraph.check_precolored(k, &func)?;
    let costs = SpillCosts::compute(&func);
    let coloring = color_graph(&igraph, &costs, k, &func)?;

    log::debug!(
      "round {} of `{}`: {} eliminated, {} spilled",
      round,
      func.name,
      eliminated.len(),
      coloring.spilled.len()
    );

    let spilled = rewrite_spills(&mut func, &coloring.spilled);
    slots.extend(spilled.iter().map(|(t, s)| (*t, *s)));
    rounds.push(RoundReport {
      round,
      liveness_passes: liveness.passes(),
      eliminated,
      nodes: igraph.num_nodes(),
      edges: igraph.num_edges(),
      trace: coloring.trace,
      spilled: spilled.clone(),
    });

    if spilled.is_empty() {
      let mut assignment = ColorAssignment::default();
      for (temp, color) in coloring.colors {
        assignment.insert(temp, Location::Reg(color));
      }
      for (temp, slot) in slots {
        assignment.insert(temp, Location::Spill(slot));
      }
      log::info!(
        "allocated `{}` in {} rounds with {} spill slots",
        func.name,
        rounds.len(),
        func.num_slots
      );
      return Ok(Allocation {
        function: func,
        assignment,
        rounds,
        pruned_blocks,
      });
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use rstest::rstest;

  use super::*;
  use crate::{asm::Instr, elaboration::function_from_ir};

  fn ctx(k: usize) -> PassContext {
    PassContext {
      num_colors: k,
      ..PassContext::default()
    }
  }

  /// Registers assigned to neighbors differ, colors stay below k and every
  /// temp of the final stream has a location.
  fn assert_valid(alloc: &Allocation, k: usize) {
    let func = &alloc.function;
    let liveness = Liveness::analyze(func, &ctx(k)).unwrap();
    let igraph = InterferenceGraph::build(func, &liveness);
    for temp in igraph.temps() {
      let Some(Location::Reg(c)) = alloc.assignment.get(&temp) else {
        panic!("{} has no register", temp);
      };
      assert!(c < k);
      for neigh in igraph.neighbors(&temp) {
        assert_ne!(alloc.assignment.get(&neigh), Some(Location::Reg(c)));
      }
    }
  }

  /// A loop whose body recomputes its counter through a temporary
  const LOOP: &str = "
    fn count(t0) {
    entry:
      t1 <- $0;
    head:
      if t1 < t0 goto body else done;
    body:
      t2 <- t1 + $1;
      t1 <- t2;
      goto head;
    done:
      ret t1;
    }";

  #[test]
  fn loop_with_two_colors() {
    let alloc = allocate(function_from_ir(LOOP), &ctx(2)).unwrap();
    assert_eq!(alloc.eliminated().count(), 0);
    assert!(alloc.num_spilled() <= 1);
    assert_valid(&alloc, 2);
  }

  #[test]
  fn pressure_above_k_spills_and_recolors() {
    let src = "fn f(t0, t1, t2, t3) {
        t4 <- t0 + t1;
        t5 <- t2 + t3;
        t6 <- t4 + t5;
        t7 <- t6 + t0;
        ret t7;
      }";
    let alloc = allocate(function_from_ir(src), &ctx(2)).unwrap();
    assert!(alloc.num_spilled() >= 1);
    assert!(alloc.rounds.len() >= 2);
    assert!(alloc.rounds.last().unwrap().spilled.is_empty());
    assert_valid(&alloc, 2);

    // spilled temps are gone from the final stream, their slots are loaded and stored
    let spilled: BTreeSet<Temp> = alloc
      .assignment
      .iter()
      .filter(|(_, loc)| matches!(loc, Location::Spill(_)))
      .map(|(t, _)| *t)
      .collect();
    assert_eq!(spilled.len(), alloc.num_spilled());
    let instrs: Vec<&Instr> = alloc.function.blocks.iter().flat_map(|b| &b.instrs).collect();
    for temp in &spilled {
      let used_in_stream = instrs
        .iter()
        .any(|i| i.dest() == Some(*temp) || i.uses().contains(temp));
      assert!(!used_in_stream, "{} still appears", temp);
    }
    assert!(instrs.iter().any(|i| matches!(i, Instr::SpillLoad { .. })));
  }

  #[test]
  fn unused_value_is_eliminated_before_coloring() {
    let src = "fn f(t0, t1) {
        t2 <- t0 + t1;
        t3 <- t0 - t1;
        ret t2;
      }";
    let alloc = allocate(function_from_ir(src), &ctx(2)).unwrap();
    let removed: Vec<_> = alloc.eliminated().map(|e| e.instr.dest()).collect();
    assert_eq!(removed, vec![Some(Temp(3))]);
    assert_eq!(alloc.assignment.get(&Temp(3)), None);
    assert_valid(&alloc, 2);
  }

  #[test]
  fn unreachable_blocks_are_pruned() {
    let src = "fn f(t0) {
        ret t0;
      dead:
        t1 <- t0 + $1;
        ret t1;
      }";
    let alloc = allocate(function_from_ir(src), &ctx(1)).unwrap();
    assert_eq!(alloc.pruned_blocks, 1);
    assert_eq!(alloc.function.blocks.len(), 1);
  }

  #[test]
  fn too_much_pressure_at_one_instruction_is_fatal() {
    let src = "fn f(t0, t1) {
        t2 <- t0 + t1;
        ret t2;
      }";
    let err = allocate(function_from_ir(src), &ctx(1)).unwrap_err();
    assert!(err.is_fatal());
  }

  #[test]
  fn zero_colors_is_a_config_error() {
    let err = allocate(function_from_ir(LOOP), &ctx(0)).unwrap_err();
    assert!(matches!(err, BackendError::Config(_)));
  }

  #[test]
  fn allocation_is_deterministic() {
    let first = allocate(function_from_ir(LOOP), &ctx(2)).unwrap();
    let second = allocate(function_from_ir(LOOP), &ctx(2)).unwrap();
    assert_eq!(first.assignment, second.assignment);
    assert_eq!(
      first.rounds.iter().map(|r| r.trace.clone()).collect::<Vec<_>>(),
      second.rounds.iter().map(|r| r.trace.clone()).collect::<Vec<_>>()
    );
  }

  #[rstest]
  #[case(2)]
  #[case(3)]
  #[case(4)]
  #[case(13)]
  fn any_k_yields_a_valid_coloring(#[case] k: usize) {
    let alloc = allocate(function_from_ir(LOOP), &ctx(k)).unwrap();
    assert_valid(&alloc, k);
  }

  #[test]
  fn pinned_parameters_keep_their_register() {
    let src = "fn f(t0: %rdi, t1: %rsi) {
        t2 <- t0 + t1;
        ret t2;
      }";
    let alloc = allocate(function_from_ir(src), &ctx(3)).unwrap();
    assert_eq!(alloc.assignment.get(&Temp(0)), Some(Location::Reg(1)));
    assert_eq!(alloc.assignment.get(&Temp(1)), Some(Location::Reg(2)));
    assert_valid(&alloc, 3);
  }

  #[test]
  fn round_bound_stops_a_spilling_allocation() {
    let src = "fn f(t0, t1, t2, t3) {
        t4 <- t0 + t1;
        t5 <- t2 + t3;
        t6 <- t4 + t5;
        t7 <- t6 + t0;
        ret t7;
      }";
    let ctx = PassContext {
      num_colors: 2,
      max_rounds: Some(1),
      ..PassContext::default()
    };
    let err = allocate(function_from_ir(src), &ctx).unwrap_err();
    assert!(matches!(err, BackendError::Internal { .. }));
    assert!(err.to_string().contains("within 1 rounds"));
  }
}
