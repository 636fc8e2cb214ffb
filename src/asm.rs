//! Three-address IR consumed by the backend passes.
//!
//! Every instruction has at most one destination temp and an ordered list of
//! source temps. Control transfers name their targets by block index, so a
//! function's blocks form an arena (see `cfg.rs`).

use std::fmt::{Display, Error, Formatter};

use enum_as_inner::EnumAsInner;
use serde::Serialize;

/// Index of a basic block inside its function.
pub type BlockId = usize;

/// Index of a dedicated spill slot in the function's frame.
pub type SlotId = u32;

/// Virtual register
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Temp(pub u32);

/// Argument (can be either a temp or a constant.)
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Operand {
  Const(i64),
  Temp(Temp),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
  Add,
  Sub,
  Mul,
  Div,
  Mod,
  BitAnd,
  BitOr,
  BitXor,
  Shl,
  Shr,
  Lt,
  Le,
  Gt,
  Ge,
  Eq,
  Neq,
}

impl BinOp {
  /// Division and modulus raise on a zero divisor, so they stay even when
  /// their result is unused.
  pub fn may_trap(&self) -> bool {
    matches!(self, BinOp::Div | BinOp::Mod)
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnOp {
  Neg,
  Not,
  BitNot,
}

#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum Cond {
  Simp(Operand),
  BinOp(Operand, BinOp, Operand),
}

/// Abstract Assembly Instruction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instr {
  BinOp {
    op: BinOp,
    dest: Temp,
    src1: Operand,
    src2: Operand,
  },
  UnOp {
    op: UnOp,
    dest: Temp,
    src: Operand,
  },
  Mov {
    dest: Temp,
    src: Operand,
  },
  Load {
    dest: Temp,
    addr: Temp,
  },
  Store {
    addr: Temp,
    src: Operand,
  },
  /// Takes the address of `var`, pinning it live for the whole function.
  AddrOf {
    dest: Temp,
    var: Temp,
  },
  /// Address of a spill slot; what an `AddrOf` becomes once its variable
  /// lives in memory.
  SlotAddr {
    dest: Temp,
    slot: SlotId,
  },
  Call {
    name: String,
    args: Vec<Operand>,
    dest: Option<Temp>,
  },
  SpillLoad {
    dest: Temp,
    slot: SlotId,
  },
  SpillStore {
    slot: SlotId,
    src: Temp,
  },
  Jmp {
    target: BlockId,
  },
  CondJmp {
    cond: Cond,
    target_true: BlockId,
    target_false: BlockId,
  },
  Return(Option<Operand>),
}

impl Instr {
  /// The temp written by this instruction, if any.
  pub fn dest(&self) -> Option<Temp> {
    match self {
      Instr::BinOp { dest, .. }
      | Instr::UnOp { dest, .. }
      | Instr::Mov { dest, .. }
      | Instr::Load { dest, .. }
      | Instr::AddrOf { dest, .. }
      | Instr::SlotAddr { dest, .. }
      | Instr::SpillLoad { dest, .. } => Some(*dest),
      Instr::Call { dest, .. } => *dest,
      _ => None,
    }
  }

  /// The temps read by this instruction, in operand order, without duplicates.
  pub fn uses(&self) -> Vec<Temp> {
    let operands = match self {
      Instr::BinOp { src1, src2, .. } => vec![*src1, *src2],
      Instr::UnOp { src, .. } | Instr::Mov { src, .. } => vec![*src],
      Instr::Load { addr, .. } => vec![Operand::Temp(*addr)],
      Instr::Store { addr, src } => vec![Operand::Temp(*addr), *src],
      Instr::AddrOf { var, .. } => vec![Operand::Temp(*var)],
      Instr::Call { args, .. } => args.clone(),
      Instr::SpillStore { src, .. } => vec![Operand::Temp(*src)],
      Instr::CondJmp { cond, .. } => match cond {
        Cond::Simp(s) => vec![*s],
        Cond::BinOp(s1, _, s2) => vec![*s1, *s2],
      },
      Instr::Return(src) => src.iter().copied().collect(),
      Instr::SlotAddr { .. } | Instr::SpillLoad { .. } | Instr::Jmp { .. } => vec![],
    };

    let mut temps: Vec<Temp> = Vec::with_capacity(operands.len());
    for temp in operands.into_iter().filter_map(|op| op.as_temp().copied()) {
      if !temps.contains(&temp) {
        temps.push(temp);
      }
    }
    temps
  }

  /// Whether the instruction is observable beyond the temps it defines.
  pub fn has_side_effect(&self) -> bool {
    match self {
      Instr::Call { .. }
      | Instr::Store { .. }
      | Instr::SpillStore { .. }
      | Instr::Jmp { .. }
      | Instr::CondJmp { .. }
      | Instr::Return(_) => true,
      Instr::BinOp { op, .. } => op.may_trap(),
      _ => false,
    }
  }

  /// `(dest, src)` for a register-to-register copy.
  pub fn copy_pair(&self) -> Option<(Temp, Temp)> {
    match self {
      Instr::Mov {
        dest,
        src: Operand::Temp(src),
      } => Some((*dest, *src)),
      _ => None,
    }
  }

  pub fn address_taken(&self) -> Option<Temp> {
    match self {
      Instr::AddrOf { var, .. } => Some(*var),
      _ => None,
    }
  }

  pub fn is_terminator(&self) -> bool {
    matches!(
      self,
      Instr::Jmp { .. } | Instr::CondJmp { .. } | Instr::Return(_)
    )
  }

  /// Explicit control-flow targets. Fallthrough is decided by the block.
  pub fn targets(&self) -> Vec<BlockId> {
    match self {
      Instr::Jmp { target } => vec![*target],
      Instr::CondJmp {
        target_true,
        target_false,
        ..
      } if target_true == target_false => vec![*target_true],
      Instr::CondJmp {
        target_true,
        target_false,
        ..
      } => vec![*target_true, *target_false],
      _ => vec![],
    }
  }

  pub fn map_targets(&mut self, mut f: impl FnMut(BlockId) -> BlockId) {
    match self {
      Instr::Jmp { target } => *target = f(*target),
      Instr::CondJmp {
        target_true,
        target_false,
        ..
      } => {
        *target_true = f(*target_true);
        *target_false = f(*target_false);
      }
      _ => {}
    }
  }

  /// Rewrite every temp this instruction reads.
  pub fn map_uses(&mut self, mut f: impl FnMut(Temp) -> Temp) {
    fn map_op<F: FnMut(Temp) -> Temp>(op: &mut Operand, f: &mut F) {
      if let Operand::Temp(t) = op {
        *t = f(*t);
      }
    }

    match self {
      Instr::BinOp { src1, src2, .. } => {
        map_op(src1, &mut f);
        map_op(src2, &mut f);
      }
      Instr::UnOp { src, .. } | Instr::Mov { src, .. } => map_op(src, &mut f),
      Instr::Load { addr, .. } => *addr = f(*addr),
      Instr::Store { addr, src } => {
        *addr = f(*addr);
        map_op(src, &mut f);
      }
      Instr::AddrOf { var, .. } => *var = f(*var),
      Instr::SpillStore { src, .. } => *src = f(*src),
      Instr::Call { args, .. } => {
        for arg in args.iter_mut() {
          map_op(arg, &mut f);
        }
      }
      Instr::CondJmp { cond, .. } => match cond {
        Cond::Simp(s) => map_op(s, &mut f),
        Cond::BinOp(s1, _, s2) => {
          map_op(s1, &mut f);
          map_op(s2, &mut f);
        }
      },
      Instr::Return(Some(src)) => map_op(src, &mut f),
      _ => {}
    }
  }

  /// Rewrite the destination temp, if there is one.
  pub fn map_dest(&mut self, f: impl FnOnce(Temp) -> Temp) {
    match self {
      Instr::BinOp { dest, .. }
      | Instr::UnOp { dest, .. }
      | Instr::Mov { dest, .. }
      | Instr::Load { dest, .. }
      | Instr::AddrOf { dest, .. }
      | Instr::SlotAddr { dest, .. }
      | Instr::SpillLoad { dest, .. }
      | Instr::Call {
        dest: Some(dest), ..
      } => *dest = f(*dest),
      _ => {}
    }
  }

  /// Display adapter that names temps, blocks and slots through `names`.
  pub fn display<'a, R: Resolve>(&'a self, names: &'a R) -> InstrDisplay<'a, R> {
    InstrDisplay { instr: self, names }
  }
}

/// Naming scheme used when rendering instructions.
pub trait Resolve {
  fn temp(&self, temp: Temp) -> String;
  fn block(&self, block: BlockId) -> String;
  fn slot(&self, slot: SlotId) -> String;
}

pub struct InstrDisplay<'a, R: Resolve> {
  instr: &'a Instr,
  names: &'a R,
}

impl<R: Resolve> InstrDisplay<'_, R> {
  fn operand(&self, op: &Operand) -> String {
    match op {
      Operand::Const(n) => format!("${}", n),
      Operand::Temp(t) => self.names.temp(*t),
    }
  }

  fn cond(&self, cond: &Cond) -> String {
    match cond {
      Cond::Simp(op) => self.operand(op),
      Cond::BinOp(l, op, r) => format!("{} {} {}", self.operand(l), op, self.operand(r)),
    }
  }
}

impl<R: Resolve> Display for InstrDisplay<'_, R> {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    let n = self.names;
    match self.instr {
      Instr::BinOp {
        op,
        dest,
        src1,
        src2,
      } => write!(
        fmt,
        "{} <- {} {} {}",
        n.temp(*dest),
        self.operand(src1),
        op,
        self.operand(src2)
      ),
      Instr::UnOp { op, dest, src } => {
        write!(fmt, "{} <- {}{}", n.temp(*dest), op, self.operand(src))
      }
      Instr::Mov { dest, src } => write!(fmt, "{} <- {}", n.temp(*dest), self.operand(src)),
      Instr::Load { dest, addr } => write!(fmt, "{} <- *{}", n.temp(*dest), n.temp(*addr)),
      Instr::Store { addr, src } => write!(fmt, "*{} <- {}", n.temp(*addr), self.operand(src)),
      Instr::AddrOf { dest, var } => write!(fmt, "{} <- &{}", n.temp(*dest), n.temp(*var)),
      Instr::SlotAddr { dest, slot } => write!(fmt, "{} <- &{}", n.temp(*dest), n.slot(*slot)),
      Instr::Call { name, args, dest } => {
        if let Some(dest) = dest {
          write!(fmt, "{} <- ", n.temp(*dest))?;
        }
        write!(fmt, "call {}(", name)?;
        for (i, arg) in args.iter().enumerate() {
          if i > 0 {
            write!(fmt, ", ")?;
          }
          write!(fmt, "{}", self.operand(arg))?;
        }
        write!(fmt, ")")
      }
      Instr::SpillLoad { dest, slot } => {
        write!(fmt, "{} <- spill_load {}", n.temp(*dest), n.slot(*slot))
      }
      Instr::SpillStore { slot, src } => {
        write!(fmt, "spill_store {} <- {}", n.slot(*slot), n.temp(*src))
      }
      Instr::Jmp { target } => write!(fmt, "goto {}", n.block(*target)),
      Instr::CondJmp {
        cond,
        target_true,
        target_false,
      } => write!(
        fmt,
        "if {} goto {} else {}",
        self.cond(cond),
        n.block(*target_true),
        n.block(*target_false)
      ),
      Instr::Return(None) => write!(fmt, "ret"),
      Instr::Return(Some(op)) => write!(fmt, "ret {}", self.operand(op)),
    }
  }
}

impl Display for Temp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    write!(fmt, "t{}", self.0)
  }
}

impl Display for BinOp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    let s = match self {
      BinOp::Add => "+",
      BinOp::Sub => "-",
      BinOp::Mul => "*",
      BinOp::Div => "/",
      BinOp::Mod => "%",
      BinOp::BitAnd => "&",
      BinOp::BitOr => "|",
      BinOp::BitXor => "^",
      BinOp::Shl => "<<",
      BinOp::Shr => ">>",
      BinOp::Lt => "<",
      BinOp::Le => "<=",
      BinOp::Gt => ">",
      BinOp::Ge => ">=",
      BinOp::Eq => "==",
      BinOp::Neq => "!=",
    };
    write!(fmt, "{}", s)
  }
}

impl Display for UnOp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match self {
      UnOp::Neg => write!(fmt, "-"),
      UnOp::Not => write!(fmt, "!"),
      UnOp::BitNot => write!(fmt, "~"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn t(n: u32) -> Temp {
    Temp(n)
  }

  #[test]
  fn uses_are_ordered_and_deduplicated() {
    let instr = Instr::BinOp {
      op: BinOp::Add,
      dest: t(3),
      src1: Operand::Temp(t(2)),
      src2: Operand::Temp(t(2)),
    };
    assert_eq!(instr.uses(), vec![t(2)]);

    let call = Instr::Call {
      name: "f".to_string(),
      args: vec![Operand::Temp(t(5)), Operand::Const(1), Operand::Temp(t(1))],
      dest: None,
    };
    assert_eq!(call.uses(), vec![t(5), t(1)]);
    assert_eq!(call.dest(), None);
  }

  #[test]
  fn side_effects() {
    let div = Instr::BinOp {
      op: BinOp::Div,
      dest: t(0),
      src1: Operand::Const(1),
      src2: Operand::Temp(t(1)),
    };
    let add = Instr::BinOp {
      op: BinOp::Add,
      dest: t(0),
      src1: Operand::Const(1),
      src2: Operand::Temp(t(1)),
    };
    assert!(div.has_side_effect());
    assert!(!add.has_side_effect());
    assert!(Instr::Return(None).has_side_effect());
    assert!(!Instr::SpillLoad { dest: t(0), slot: 0 }.has_side_effect());
    assert!(Instr::SpillStore { slot: 0, src: t(0) }.has_side_effect());
  }

  #[test]
  fn rewrite_uses_and_dest() {
    let mut instr = Instr::Store {
      addr: t(1),
      src: Operand::Temp(t(1)),
    };
    instr.map_uses(|temp| if temp == t(1) { t(9) } else { temp });
    assert_eq!(
      instr,
      Instr::Store {
        addr: t(9),
        src: Operand::Temp(t(9))
      }
    );

    let mut mov = Instr::Mov {
      dest: t(4),
      src: Operand::Temp(t(2)),
    };
    assert_eq!(mov.copy_pair(), Some((t(4), t(2))));
    mov.map_dest(|_| t(7));
    assert_eq!(mov.dest(), Some(t(7)));
  }

  #[test]
  fn cond_jump_to_same_block_has_one_target() {
    let jmp = Instr::CondJmp {
      cond: Cond::Simp(Operand::Temp(t(0))),
      target_true: 2,
      target_false: 2,
    };
    assert_eq!(jmp.targets(), vec![2]);
  }
}
