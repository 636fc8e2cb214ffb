pub(crate) mod reg;

pub use reg::X86_64Register;

use crate::asm::SlotId;
use crate::cfg::Color;

pub const REG_ALLOC_POOL_SIZE: usize = 13;

/// Register a color maps to, if the pool is large enough.
pub fn reg_from_color(color: Color) -> Option<X86_64Register> {
  if color < REG_ALLOC_POOL_SIZE {
    X86_64Register::from_repr(color)
  } else {
    None
  }
}

pub fn color_from_reg(reg: X86_64Register) -> Option<Color> {
  let color = reg as usize;
  (color < REG_ALLOC_POOL_SIZE).then_some(color)
}

/// Frame location of a spill slot: slot n lives at -8(n+1) from the base pointer.
pub fn spill_slot_operand(slot: SlotId) -> String {
  format!("-{}({})", 8 * (slot as u64 + 1), X86_64Register::RBP)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reg_index_order() {
    for i in 0..REG_ALLOC_POOL_SIZE {
      assert_eq!(color_from_reg(reg_from_color(i).unwrap()), Some(i));
    }
    assert_eq!(reg_from_color(REG_ALLOC_POOL_SIZE), None);
    assert_eq!(color_from_reg(X86_64Register::R11), None);
  }

  #[test]
  fn pool_order() {
    let names: Vec<String> = (0..REG_ALLOC_POOL_SIZE)
      .map(|c| reg_from_color(c).unwrap().to_string())
      .collect();
    assert_eq!(
      names.join(" "),
      "%rax %rdi %rsi %rdx %rcx %r8 %r9 %r10 %rbx %r12 %r13 %r14 %r15"
    );
  }

  #[test]
  fn parse_names() {
    assert_eq!(X86_64Register::from_name("%rdi"), Some(X86_64Register::RDI));
    assert_eq!(X86_64Register::from_name("r12"), Some(X86_64Register::R12));
    assert_eq!(X86_64Register::from_name("%xmm0"), None);
  }

  #[test]
  fn spill_slots_grow_down() {
    assert_eq!(spill_slot_operand(0), "-8(%rbp)");
    assert_eq!(spill_slot_operand(2), "-24(%rbp)");
  }
}
