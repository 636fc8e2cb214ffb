use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
  asm::{BlockId, Instr, Temp},
  ast::{Rhs, SurfaceFunction, SurfaceInstr, SurfaceLine},
  cfg::{Color, Function},
  error::{BackendError, Result},
  registers::{color_from_reg, X86_64Register},
};

/// Instructions with their jump targets still written as labels.
type PendingBlock = (Option<String>, Vec<SurfaceInstr>);

/// Elaborate one surface function into a control flow graph.
///
/// With `precolor_params`, the first six parameters without an explicit pin
/// are pinned to the argument registers.
pub fn elab_function(surface: SurfaceFunction, precolor_params: bool) -> Result<Function> {
  let SurfaceFunction { name, params, body } = surface;

  let mut seen = BTreeSet::new();
  let mut precolored: BTreeMap<Temp, Color> = BTreeMap::new();
  for (idx, param) in params.iter().enumerate() {
    if !seen.insert(param.temp) {
      return Err(BackendError::malformed(
        &name,
        format!("duplicate parameter {}", param.temp),
      ));
    }
    let reg = match &param.reg {
      Some(reg) => Some(
        X86_64Register::from_name(reg)
          .ok_or_else(|| BackendError::malformed(&name, format!("unknown register {}", reg)))?,
      ),
      None if precolor_params => X86_64Register::argument_regs().get(idx).copied(),
      None => None,
    };
    if let Some(reg) = reg {
      let color = color_from_reg(reg).ok_or_else(|| {
        BackendError::malformed(&name, format!("{} is not an allocatable register", reg))
      })?;
      precolored.insert(param.temp, color);
    }
  }

  let pending = split_blocks(body);
  if pending.iter().all(|(_, instrs)| instrs.is_empty()) {
    return Err(BackendError::malformed(&name, "function has no instructions"));
  }

  let mut labels: HashMap<String, BlockId> = HashMap::new();
  let mut anon = 0;
  let mut named = Vec::with_capacity(pending.len());
  for (id, (label, instrs)) in pending.into_iter().enumerate() {
    let label = match label {
      Some(label) => label,
      None if id == 0 => format!("{}.entry", name),
      None => {
        anon += 1;
        format!(".{}.{}", name, anon)
      }
    };
    if labels.insert(label.clone(), id).is_some() {
      return Err(BackendError::malformed(&name, format!("duplicate label `{}`", label)));
    }
    named.push((label, instrs));
  }

  let resolve = |label: &str| -> Result<BlockId> {
    labels
      .get(label)
      .copied()
      .ok_or_else(|| BackendError::malformed(&name, format!("unknown label `{}`", label)))
  };

  let mut blocks = Vec::with_capacity(named.len());
  for (label, instrs) in &named {
    let instrs = instrs
      .iter()
      .cloned()
      .map(|instr| elab_instr(instr, &resolve))
      .collect::<Result<Vec<_>>>()?;
    blocks.push((label.clone(), instrs));
  }

  let params = params.into_iter().map(|p| p.temp).collect();
  let mut func = Function::new(name, params, precolored, blocks);
  // slots already named in the text stay taken
  func.num_slots = func
    .blocks
    .iter()
    .flat_map(|b| b.instrs.iter())
    .filter_map(|instr| match instr {
      Instr::SpillLoad { slot, .. } | Instr::SpillStore { slot, .. } | Instr::SlotAddr { slot, .. } => {
        Some(slot + 1)
      }
      _ => None,
    })
    .max()
    .unwrap_or(0);
  Ok(func)
}

/// Cut the body at labels and after terminators.
fn split_blocks(body: Vec<SurfaceLine>) -> Vec<PendingBlock> {
  let mut blocks: Vec<PendingBlock> = vec![(None, vec![])];
  for line in body {
    // never empty, starts with one block
    let Some(current) = blocks.last_mut() else {
      continue;
    };
    match line {
      SurfaceLine::Label(label) => {
        if current.0.is_none() && current.1.is_empty() {
          current.0 = Some(label);
        } else {
          blocks.push((Some(label), vec![]));
        }
      }
      SurfaceLine::Instr(instr) => {
        if current.1.last().map_or(false, is_terminator) {
          blocks.push((None, vec![instr]));
        } else {
          current.1.push(instr);
        }
      }
    }
  }
  blocks
}

fn is_terminator(instr: &SurfaceInstr) -> bool {
  matches!(
    instr,
    SurfaceInstr::Goto(_) | SurfaceInstr::If(..) | SurfaceInstr::Ret(_)
  )
}

fn elab_instr(instr: SurfaceInstr, resolve: &impl Fn(&str) -> Result<BlockId>) -> Result<Instr> {
  let instr = match instr {
    SurfaceInstr::Assign(dest, rhs) => elab_rhs(dest, rhs),
    SurfaceInstr::Store(addr, src) => Instr::Store { addr, src },
    SurfaceInstr::Call(name, args) => Instr::Call {
      name,
      args,
      dest: None,
    },
    SurfaceInstr::SpillStore(slot, src) => Instr::SpillStore { slot, src },
    SurfaceInstr::Goto(target) => Instr::Jmp {
      target: resolve(&target)?,
    },
    SurfaceInstr::If(cond, target_true, target_false) => Instr::CondJmp {
      cond,
      target_true: resolve(&target_true)?,
      target_false: resolve(&target_false)?,
    },
    SurfaceInstr::Ret(src) => Instr::Return(src),
  };
  Ok(instr)
}

fn elab_rhs(dest: Temp, rhs: Rhs) -> Instr {
  match rhs {
    Rhs::Binary(op, src1, src2) => Instr::BinOp {
      op,
      dest,
      src1,
      src2,
    },
    Rhs::Unary(op, src) => Instr::UnOp { op, dest, src },
    Rhs::Move(src) => Instr::Mov { dest, src },
    Rhs::Load(addr) => Instr::Load { dest, addr },
    Rhs::AddrOf(var) => Instr::AddrOf { dest, var },
    Rhs::SlotAddr(slot) => Instr::SlotAddr { dest, slot },
    Rhs::SpillLoad(slot) => Instr::SpillLoad { dest, slot },
    Rhs::Call(name, args) => Instr::Call {
      name,
      args,
      dest: Some(dest),
    },
  }
}
