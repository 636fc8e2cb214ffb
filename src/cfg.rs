use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::asm::{BlockId, Instr, Resolve, SlotId, Temp};

/// Every function starts executing at its first block.
pub const ENTRY: BlockId = 0;

/// Physical register index handed out by the allocator.
pub type Color = usize;

/// Loop nesting beyond this depth does not make a temp any more expensive to spill.
const MAX_LOOP_DEPTH: u32 = 8;

#[derive(Debug, Clone)]
pub struct BasicBlock {
  pub id: BlockId,
  pub label: String,
  pub instrs: Vec<Instr>,
  pub succs: Vec<BlockId>,
  pub preds: Vec<BlockId>,
}

impl BasicBlock {
  /// The temps this block defines anywhere in its body.
  pub fn defs(&self) -> BTreeSet<Temp> {
    self.instrs.iter().filter_map(Instr::dest).collect()
  }

  /// The temps read before any definition in this block (upward exposed uses).
  pub fn upward_uses(&self) -> BTreeSet<Temp> {
    let mut gen = BTreeSet::new();
    for instr in self.instrs.iter().rev() {
      if let Some(dest) = instr.dest() {
        gen.remove(&dest);
      }
      gen.extend(instr.uses());
    }
    gen
  }

  fn falls_through(&self) -> bool {
    !matches!(self.instrs.last(), Some(instr) if instr.is_terminator())
  }
}

/// One function's control flow graph: an arena of blocks addressed by index.
#[derive(Debug, Clone)]
pub struct Function {
  pub name: String,
  pub params: Vec<Temp>,
  /// Temps whose register is fixed by the calling convention.
  pub precolored: BTreeMap<Temp, Color>,
  pub blocks: Vec<BasicBlock>,
  /// Temps introduced by spill code. They are never spilled again.
  pub spill_temps: BTreeSet<Temp>,
  /// Spilled parameters, delivered in their stack slot instead of a register
  pub stack_params: BTreeMap<Temp, SlotId>,
  pub num_slots: SlotId,
  next_temp: u32,
}

impl Function {
  pub fn new(
    name: String,
    params: Vec<Temp>,
    precolored: BTreeMap<Temp, Color>,
    blocks: Vec<(String, Vec<Instr>)>,
  ) -> Self {
    let blocks = blocks
      .into_iter()
      .enumerate()
      .map(|(id, (label, instrs))| BasicBlock {
        id,
        label,
        instrs,
        succs: vec![],
        preds: vec![],
      })
      .collect();

    let mut func = Function {
      name,
      params,
      precolored,
      blocks,
      spill_temps: BTreeSet::new(),
      stack_params: BTreeMap::new(),
      num_slots: 0,
      next_temp: 0,
    };
    func.next_temp = func.all_temps().iter().next_back().map_or(0, |t| t.0 + 1);
    func.rebuild_edges();
    func
  }

  /// Recompute successor and predecessor lists from the terminators.
  pub fn rebuild_edges(&mut self) {
    let nblocks = self.blocks.len();
    let mut preds = vec![vec![]; nblocks];
    for block in self.blocks.iter_mut() {
      let mut succs = block.instrs.last().map_or(vec![], Instr::targets);
      if block.falls_through() && block.id + 1 < nblocks {
        succs.push(block.id + 1);
      }
      for succ in &succs {
        preds[*succ].push(block.id);
      }
      block.succs = succs;
    }
    for (block, preds) in self.blocks.iter_mut().zip(preds) {
      block.preds = preds;
    }
  }

  /// Parameters that arrive in a register.
  pub fn register_params(&self) -> impl Iterator<Item = Temp> + '_ {
    self
      .params
      .iter()
      .copied()
      .filter(|p| !self.stack_params.contains_key(p))
  }

  pub fn block(&self, id: BlockId) -> &BasicBlock {
    &self.blocks[id]
  }

  /// Blocks without successors.
  pub fn exits(&self) -> Vec<BlockId> {
    self
      .blocks
      .iter()
      .filter(|b| b.succs.is_empty())
      .map(|b| b.id)
      .collect()
  }

  pub fn reachable(&self) -> Vec<bool> {
    let mut reachable = vec![false; self.blocks.len()];
    if self.blocks.is_empty() {
      return reachable;
    }
    let mut queue = VecDeque::from([ENTRY]);
    while let Some(id) = queue.pop_front() {
      if reachable[id] {
        continue;
      }
      reachable[id] = true;
      queue.extend(self.blocks[id].succs.iter().copied());
    }
    reachable
  }

  /// Postorder over the blocks reachable from the entry.
  pub fn postorder(&self) -> Vec<BlockId> {
    let mut order = Vec::with_capacity(self.blocks.len());
    if self.blocks.is_empty() {
      return order;
    }
    let mut visited = vec![false; self.blocks.len()];
    // (block, index of the next successor to visit)
    let mut stack = vec![(ENTRY, 0)];
    visited[ENTRY] = true;
    while let Some((id, next)) = stack.pop() {
      if let Some(&succ) = self.blocks[id].succs.get(next) {
        stack.push((id, next + 1));
        if !visited[succ] {
          visited[succ] = true;
          stack.push((succ, 0));
        }
      } else {
        order.push(id);
      }
    }
    order
  }

  /// Loop nesting depth of each block, from the natural loops of the DFS back edges.
  pub fn loop_depths(&self) -> Vec<u32> {
    let nblocks = self.blocks.len();
    let mut depths = vec![0; nblocks];
    if nblocks == 0 {
      return depths;
    }

    // back edges: tail -> header where header is still on the DFS stack
    let mut bodies: BTreeMap<BlockId, BTreeSet<BlockId>> = BTreeMap::new();
    let mut on_stack = vec![false; nblocks];
    let mut visited = vec![false; nblocks];
    let mut stack = vec![(ENTRY, 0)];
    visited[ENTRY] = true;
    on_stack[ENTRY] = true;
    while let Some((id, next)) = stack.pop() {
      if let Some(&succ) = self.blocks[id].succs.get(next) {
        stack.push((id, next + 1));
        if on_stack[succ] {
          let body = bodies.entry(succ).or_default();
          body.extend(self.natural_loop(succ, id));
        } else if !visited[succ] {
          visited[succ] = true;
          on_stack[succ] = true;
          stack.push((succ, 0));
        }
      } else {
        on_stack[id] = false;
      }
    }

    for body in bodies.values() {
      for &id in body {
        depths[id] = (depths[id] + 1).min(MAX_LOOP_DEPTH);
      }
    }
    depths
  }

  /// Blocks that reach `tail` without passing through `header`, plus the header.
  fn natural_loop(&self, header: BlockId, tail: BlockId) -> BTreeSet<BlockId> {
    let mut body = BTreeSet::from([header]);
    let mut worklist = vec![tail];
    while let Some(id) = worklist.pop() {
      if body.insert(id) {
        worklist.extend(self.blocks[id].preds.iter().copied());
      }
    }
    body
  }

  /// Drop blocks the entry cannot reach and renumber the survivors.
  ///
  /// Returns the number of blocks removed.
  pub fn prune_unreachable(&mut self) -> usize {
    let reachable = self.reachable();
    let removed = reachable.iter().filter(|r| !**r).count();
    if removed == 0 {
      return 0;
    }

    let mut renumber = vec![None; self.blocks.len()];
    let mut next = 0;
    for (old, keep) in reachable.iter().enumerate() {
      if *keep {
        renumber[old] = Some(next);
        next += 1;
      }
    }

    let blocks = std::mem::take(&mut self.blocks);
    self.blocks = blocks
      .into_iter()
      .filter(|b| reachable[b.id])
      .map(|mut b| {
        b.id = renumber[b.id].unwrap_or(b.id);
        if let Some(last) = b.instrs.last_mut() {
          // reachable blocks only jump to reachable blocks
          last.map_targets(|target| renumber[target].unwrap_or(target));
        }
        b
      })
      .collect();
    self.rebuild_edges();
    removed
  }

  pub fn fresh_temp(&mut self) -> Temp {
    let temp = Temp(self.next_temp);
    self.next_temp += 1;
    temp
  }

  /// A fresh temp that holds a spilled value for a single instruction.
  pub fn fresh_spill_temp(&mut self) -> Temp {
    let temp = self.fresh_temp();
    self.spill_temps.insert(temp);
    temp
  }

  pub fn alloc_slot(&mut self) -> SlotId {
    let slot = self.num_slots;
    self.num_slots += 1;
    slot
  }

  /// Every temp named by a parameter, a pin or an instruction.
  pub fn all_temps(&self) -> BTreeSet<Temp> {
    let mut temps: BTreeSet<Temp> = self.params.iter().copied().collect();
    temps.extend(self.precolored.keys().copied());
    for instr in self.blocks.iter().flat_map(|b| b.instrs.iter()) {
      temps.extend(instr.dest());
      temps.extend(instr.uses());
    }
    temps
  }

  pub fn instr_count(&self) -> usize {
    self.blocks.iter().map(|b| b.instrs.len()).sum()
  }
}

/// Plain IR naming: `t3`, block labels and `slot0`.
impl Resolve for Function {
  fn temp(&self, temp: Temp) -> String {
    temp.to_string()
  }

  fn block(&self, block: BlockId) -> String {
    self
      .blocks
      .get(block)
      .map_or_else(|| format!(".b{}", block), |b| b.label.clone())
  }

  fn slot(&self, slot: SlotId) -> String {
    format!("slot{}", slot)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::asm::{BinOp, Cond, Operand};

  fn t(n: u32) -> Temp {
    Temp(n)
  }

  /// entry -> head; head -> body | exit; body -> head; dead -> exit
  fn looping() -> Function {
    let cond = Cond::BinOp(Operand::Temp(t(0)), BinOp::Lt, Operand::Const(10));
    Function::new(
      "loop".to_string(),
      vec![t(0)],
      BTreeMap::new(),
      vec![
        (
          "entry".to_string(),
          vec![Instr::Mov {
            dest: t(1),
            src: Operand::Const(0),
          }],
        ),
        (
          "head".to_string(),
          vec![Instr::CondJmp {
            cond,
            target_true: 2,
            target_false: 4,
          }],
        ),
        (
          "body".to_string(),
          vec![
            Instr::BinOp {
              op: BinOp::Add,
              dest: t(1),
              src1: Operand::Temp(t(1)),
              src2: Operand::Temp(t(0)),
            },
            Instr::Jmp { target: 1 },
          ],
        ),
        (
          "dead".to_string(),
          vec![Instr::Mov {
            dest: t(7),
            src: Operand::Const(1),
          }],
        ),
        ("exit".to_string(), vec![Instr::Return(Some(Operand::Temp(t(1))))]),
      ],
    )
  }

  #[test]
  fn edges_follow_terminators_and_fallthrough() {
    let func = looping();
    assert_eq!(func.block(0).succs, vec![1]);
    assert_eq!(func.block(1).succs, vec![2, 4]);
    assert_eq!(func.block(2).succs, vec![1]);
    assert_eq!(func.block(3).succs, vec![4]);
    assert_eq!(func.block(1).preds, vec![0, 2]);
    assert_eq!(func.block(4).preds, vec![1, 3]);
    assert_eq!(func.exits(), vec![4]);
  }

  #[test]
  fn reachability_and_postorder() {
    let func = looping();
    assert_eq!(func.reachable(), vec![true, true, true, false, true]);
    let order = func.postorder();
    assert_eq!(order.len(), 4);
    assert_eq!(*order.last().unwrap(), ENTRY);
    assert!(!order.contains(&3));
  }

  #[test]
  fn loop_depths_mark_the_natural_loop() {
    let func = looping();
    assert_eq!(func.loop_depths(), vec![0, 1, 1, 0, 0]);
  }

  #[test]
  fn prune_renumbers_targets() {
    let mut func = looping();
    assert_eq!(func.prune_unreachable(), 1);
    assert_eq!(func.blocks.len(), 4);
    assert_eq!(func.block(3).label, "exit");
    assert_eq!(
      func.block(1).instrs[0].targets(),
      vec![2, 3],
      "head must now branch to the renumbered exit"
    );
    assert_eq!(func.block(3).preds, vec![1]);
  }

  #[test]
  fn fresh_temps_do_not_collide() {
    let mut func = looping();
    let fresh = func.fresh_spill_temp();
    assert_eq!(fresh, t(8));
    assert!(func.spill_temps.contains(&fresh));
    assert_eq!(func.alloc_slot(), 0);
    assert_eq!(func.alloc_slot(), 1);
  }

  #[test]
  fn local_gen_and_kill() {
    let func = looping();
    let body = func.block(2);
    assert_eq!(body.upward_uses(), BTreeSet::from([t(0), t(1)]));
    assert_eq!(body.defs(), BTreeSet::from([t(1)]));
  }
}
