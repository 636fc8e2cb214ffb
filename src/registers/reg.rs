use std::fmt;

use strum_macros::{AsRefStr, FromRepr};

/// 64-bit x86_64 registers.
///
/// Declaration order is the allocation order: the first `REG_ALLOC_POOL_SIZE`
/// variants form the pool and a color is the variant's discriminant.
#[allow(clippy::upper_case_acronyms)]
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, AsRefStr, FromRepr)]
#[strum(serialize_all = "lowercase")]
pub enum X86_64Register {
  RAX,
  RDI,
  RSI,
  RDX,
  RCX,
  R8,
  R9,
  R10,
  RBX,
  R12,
  R13,
  R14,
  R15,
  // scratch and frame registers, never handed out
  R11,
  RBP,
  RSP,
}

impl X86_64Register {
  pub const fn argument_regs() -> [X86_64Register; 6] {
    [
      X86_64Register::RDI,
      X86_64Register::RSI,
      X86_64Register::RDX,
      X86_64Register::RCX,
      X86_64Register::R8,
      X86_64Register::R9,
    ]
  }

  /// Parse a register name, with or without the leading `%`.
  pub fn from_name(name: &str) -> Option<Self> {
    let name = name.strip_prefix('%').unwrap_or(name);
    (0..)
      .map_while(X86_64Register::from_repr)
      .find(|reg| reg.as_ref() == name)
  }
}

impl fmt::Display for X86_64Register {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "%{}", self.as_ref())
  }
}
