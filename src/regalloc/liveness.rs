// Function -> per-block gen/kill -> backward fixpoint -> per-instruction live-after sets

use std::collections::BTreeSet;

use crate::{
  asm::{BlockId, Temp},
  cfg::{Function, ENTRY},
  error::{BackendError, Result},
  pipeline::PassContext,
};

/// Liveness facts of one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockLiveness {
  pub live_in: BTreeSet<Temp>,
  pub live_out: BTreeSet<Temp>,
  /// `live_after[i]` holds the temps live right after instruction i.
  pub live_after: Vec<BTreeSet<Temp>>,
}

/// The liveness analysis result of a function
#[derive(Debug, Clone)]
pub struct Liveness {
  blocks: Vec<BlockLiveness>,
  reachable: Vec<bool>,
  /// Temps whose address escapes. They are live at every point of the reachable code.
  address_taken: BTreeSet<Temp>,
  /// Number of full passes over the blocks until nothing changed
  passes: usize,
}

impl Liveness {
  /// Run the backward dataflow analysis to its fixpoint.
  pub fn analyze(func: &Function, ctx: &PassContext) -> Result<Self> {
    let reachable = func.reachable();
    // successors before predecessors
    let order = func.postorder();

    let address_taken: BTreeSet<Temp> = order
      .iter()
      .flat_map(|id| func.block(*id).instrs.iter())
      .filter_map(|instr| instr.address_taken())
      .collect();

    let gens: Vec<BTreeSet<Temp>> = func.blocks.iter().map(|b| b.upward_uses()).collect();
    let kills: Vec<BTreeSet<Temp>> = func.blocks.iter().map(|b| b.defs()).collect();
    let mut live_in = vec![BTreeSet::new(); func.blocks.len()];
    let mut live_out = vec![BTreeSet::new(); func.blocks.len()];

    let mut passes = 0;
    let mut changed = true;
    while changed {
      if passes >= ctx.max_iterations {
        return Err(BackendError::internal(
          &func.name,
          format!("liveness did not converge within {} passes", ctx.max_iterations),
          None,
        ));
      }
      changed = false;
      passes += 1;

      for &id in &order {
        let out: BTreeSet<Temp> = func
          .block(id)
          .succs
          .iter()
          .flat_map(|succ| live_in[*succ].iter().copied())
          .collect();
        let mut inn: BTreeSet<Temp> = out.difference(&kills[id]).copied().collect();
        inn.extend(gens[id].iter().copied());

        // sets only grow
        if inn.len() != live_in[id].len() {
          changed = true;
          live_in[id] = inn;
        }
        live_out[id] = out;
      }
      log::trace!("liveness pass {} of `{}` changed: {}", passes, func.name, changed);
    }

    let blocks = func
      .blocks
      .iter()
      .map(|block| {
        if !reachable[block.id] {
          return BlockLiveness {
            live_after: vec![BTreeSet::new(); block.instrs.len()],
            ..Default::default()
          };
        }

        let mut live_after = vec![BTreeSet::new(); block.instrs.len()];
        let mut live = live_out[block.id].clone();
        for (idx, instr) in block.instrs.iter().enumerate().rev() {
          live_after[idx] = &live | &address_taken;
          if let Some(dest) = instr.dest() {
            live.remove(&dest);
          }
          live.extend(instr.uses());
        }

        BlockLiveness {
          live_in: &live_in[block.id] | &address_taken,
          live_out: &live_out[block.id] | &address_taken,
          live_after,
        }
      })
      .collect();

    let liveness = Liveness {
      blocks,
      reachable,
      address_taken,
      passes,
    };
    liveness.debug_show_livein(func);
    Ok(liveness)
  }

  pub fn block(&self, id: BlockId) -> &BlockLiveness {
    &self.blocks[id]
  }

  pub fn live_in(&self, id: BlockId) -> &BTreeSet<Temp> {
    &self.blocks[id].live_in
  }

  pub fn live_out(&self, id: BlockId) -> &BTreeSet<Temp> {
    &self.blocks[id].live_out
  }

  pub fn live_after(&self, id: BlockId, idx: usize) -> &BTreeSet<Temp> {
    &self.blocks[id].live_after[idx]
  }

  /// Temps live on function entry: parameters in use and anything read before
  /// its first definition.
  pub fn entry_live_in(&self) -> &BTreeSet<Temp> {
    self.live_in(ENTRY)
  }

  pub fn is_reachable(&self, id: BlockId) -> bool {
    self.reachable.get(id).copied().unwrap_or(false)
  }

  pub fn address_taken(&self) -> &BTreeSet<Temp> {
    &self.address_taken
  }

  #[inline]
  pub fn passes(&self) -> usize {
    self.passes
  }

  fn debug_show_livein(&self, func: &Function) {
    if !log::log_enabled!(log::Level::Debug) {
      return;
    }
    log::debug!("liveness of `{}` converged after {} passes", func.name, self.passes);
    for block in &func.blocks {
      log::debug!(
        "Block {}: in {:?}, out {:?}",
        block.label,
        self.live_in(block.id),
        self.live_out(block.id)
      );
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

  fn temps(ts: &[u32]) -> BTreeSet<Temp> {
    ts.iter().map(|t| Temp(*t)).collect()
  }

  const LOOP: &str = "
    fn sum(t0) {
    entry:
      t1 <- $0;
      t2 <- $0;
    head:
      if t2 < t0 goto body else done;
    body:
      t3 <- t1 + t2;
      t1 <- t3;
      t2 <- t2 + $1;
      goto head;
    done:
      ret t1;
    }";

  #[test]
  fn dataflow_equations_hold() {
    let func = function_from_ir(LOOP);
    let live = Liveness::analyze(&func, &ctx()).unwrap();
    for block in &func.blocks {
      let out: BTreeSet<Temp> = block
        .succs
        .iter()
        .flat_map(|s| live.live_in(*s).iter().copied())
        .collect();
      assert_eq!(live.live_out(block.id), &out);

      let mut inn: BTreeSet<Temp> = out.difference(&block.defs()).copied().collect();
      inn.extend(block.upward_uses());
      assert_eq!(live.live_in(block.id), &inn, "block {}", block.label);
    }
  }

  #[test]
  fn values_live_across_back_edge() {
    let func = function_from_ir(LOOP);
    let live = Liveness::analyze(&func, &ctx()).unwrap();
    // head is block 1, body block 2
    assert_eq!(live.live_in(1), &temps(&[0, 1, 2]));
    assert_eq!(live.live_out(2), &temps(&[0, 1, 2]));
    assert_eq!(live.entry_live_in(), &temps(&[0]));
    // t3 dies at the copy into t1
    assert_eq!(live.live_after(2, 0), &temps(&[0, 2, 3]));
    assert_eq!(live.live_after(2, 1), &temps(&[0, 1, 2]));
    assert!(live.passes() >= 2);
  }

  #[test]
  fn reanalysis_is_idempotent() {
    let func = function_from_ir(LOOP);
    let first = Liveness::analyze(&func, &ctx()).unwrap();
    let second = Liveness::analyze(&func, &ctx()).unwrap();
    assert_eq!(first.blocks, second.blocks);
    assert_eq!(first.passes(), second.passes());
  }

  #[test]
  fn unreachable_blocks_get_empty_sets() {
    let func = function_from_ir(
      "fn f(t0) {
        ret t0;
        t1 <- t0 + $1;
        ret t1;
      }",
    );
    let live = Liveness::analyze(&func, &ctx()).unwrap();
    assert!(!live.is_reachable(1));
    assert!(live.live_in(1).is_empty());
    assert!(live.live_after(1, 0).is_empty());
    assert_eq!(live.live_in(0), &temps(&[0]));
  }

  #[test]
  fn address_taken_is_live_everywhere() {
    let func = function_from_ir(
      "fn f() {
        t0 <- $1;
        t1 <- &t0;
        t2 <- call g(t1);
        ret t2;
      }",
    );
    let live = Liveness::analyze(&func, &ctx()).unwrap();
    assert_eq!(live.address_taken(), &temps(&[0]));
    assert!(live.live_after(0, 3).contains(&Temp(0)));
    assert!(live.live_in(0).contains(&Temp(0)));
  }

  #[test]
  fn watchdog_trips() {
    let func = function_from_ir(LOOP);
    let ctx = PassContext {
      max_iterations: 1,
      ..PassContext::default()
    };
    let err = Liveness::analyze(&func, &ctx).unwrap_err();
    assert!(err.is_fatal());
  }
}
