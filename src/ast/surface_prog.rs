//! The surface AST for the IR text. This is the data structure that the parser
//! will produce. Labels are still names here; elaboration resolves them into
//! block indices.

use crate::asm::{BinOp, Cond, Operand, SlotId, Temp, UnOp};

pub type SurfaceProgram = Vec<SurfaceFunction>;

#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceFunction {
  pub name: String,
  pub params: Vec<SurfaceParam>,
  pub body: Vec<SurfaceLine>,
}

/// A parameter, optionally pinned to a register as in `t0: %rdi`
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceParam {
  pub temp: Temp,
  pub reg: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceLine {
  Label(String),
  Instr(SurfaceInstr),
}

// Surface instruction before label resolution
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceInstr {
  Assign(Temp, Rhs),
  Store(Temp, Operand),
  Call(String, Vec<Operand>),
  SpillStore(SlotId, Temp),
  Goto(String),
  If(Cond, String, String),
  Ret(Option<Operand>),
}

/// Right hand side of `t <- ...`
#[derive(Clone, Debug, PartialEq)]
pub enum Rhs {
  Binary(BinOp, Operand, Operand),
  Unary(UnOp, Operand),
  Move(Operand),
  Load(Temp),
  AddrOf(Temp),
  SlotAddr(SlotId),
  SpillLoad(SlotId),
  Call(String, Vec<Operand>),
}
