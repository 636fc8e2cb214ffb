// Spilled temp -> dedicated slot -> load before each use, store after each def

use std::collections::BTreeMap;

use crate::{
  asm::{Instr, SlotId, Temp},
  cfg::Function,
};

/// Rewrite `func` so that every temp in `spilled` lives in its own stack slot.
///
/// Each access goes through a fresh temp that lives for a single instruction;
/// a temp both read and written by one instruction shares one fresh temp.
/// A spilled parameter is delivered in its slot and never enters a register.
/// Returns the slot chosen for each spilled temp.
pub fn rewrite_spills(func: &mut Function, spilled: &[Temp]) -> BTreeMap<Temp, SlotId> {
  let slots: BTreeMap<Temp, SlotId> = spilled.iter().map(|t| (*t, func.alloc_slot())).collect();
  if slots.is_empty() {
    return slots;
  }

  for param in &func.params {
    if let Some(slot) = slots.get(param) {
      func.stack_params.insert(*param, *slot);
    }
  }

  for id in 0..func.blocks.len() {
    let instrs = std::mem::take(&mut func.blocks[id].instrs);
    let mut rewritten = Vec::with_capacity(instrs.len());

    for mut instr in instrs {
      if let Instr::AddrOf { dest, var } = instr {
        if let Some(slot) = slots.get(&var) {
          instr = Instr::SlotAddr { dest, slot: *slot };
        }
      }

      let mut fresh: BTreeMap<Temp, Temp> = BTreeMap::new();
      for temp in instr.uses() {
        if let Some(slot) = slots.get(&temp) {
          let load = func.fresh_spill_temp();
          rewritten.push(Instr::SpillLoad {
            dest: load,
            slot: *slot,
          });
          fresh.insert(temp, load);
        }
      }
      instr.map_uses(|temp| fresh.get(&temp).copied().unwrap_or(temp));

      let mut store = None;
      if let Some(dest) = instr.dest() {
        if let Some(slot) = slots.get(&dest) {
          let src = match fresh.get(&dest) {
            Some(shared) => *shared,
            None => func.fresh_spill_temp(),
          };
          instr.map_dest(|_| src);
          store = Some(Instr::SpillStore { slot: *slot, src });
        }
      }

      rewritten.push(instr);
      rewritten.extend(store);
    }
    func.blocks[id].instrs = rewritten;
  }

  log::debug!("spilled {:?} of `{}` to {:?}", spilled, func.name, slots);
  slots
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{asm::Operand, elaboration::function_from_ir};

  #[test]
  fn loads_before_uses_and_stores_after_defs() {
    let mut func = function_from_ir(
      "fn f(t0) {
        t1 <- t0 + $1;
        t2 <- t1 * t1;
        ret t2;
      }",
    );
    let slots = rewrite_spills(&mut func, &[Temp(1)]);
    assert_eq!(slots[&Temp(1)], 0);
    assert_eq!(func.num_slots, 1);

    let instrs = &func.blocks[0].instrs;
    assert_eq!(instrs.len(), 5);
    let def = instrs[0].dest().unwrap();
    assert_eq!(instrs[1], Instr::SpillStore { slot: 0, src: def });
    let load = instrs[2].dest().unwrap();
    assert_eq!(instrs[2], Instr::SpillLoad { dest: load, slot: 0 });
    assert_eq!(instrs[3].uses(), vec![load]);
    assert_ne!(def, load);
    assert!(func.spill_temps.contains(&def) && func.spill_temps.contains(&load));
    assert!(!func.all_temps().contains(&Temp(1)));
  }

  #[test]
  fn read_modify_write_shares_one_temp() {
    let mut func = function_from_ir(
      "fn f(t0) {
        t0 <- t0 + $1;
        ret t0;
      }",
    );
    rewrite_spills(&mut func, &[Temp(0)]);
    let instrs = &func.blocks[0].instrs;
    // load, add, store, load, ret
    assert_eq!(instrs.len(), 5);
    let shared = instrs[0].dest().unwrap();
    assert_eq!(instrs[0], Instr::SpillLoad { dest: shared, slot: 0 });
    assert_eq!(instrs[1].dest(), Some(shared));
    assert_eq!(instrs[1].uses(), vec![shared]);
    assert_eq!(instrs[2], Instr::SpillStore { slot: 0, src: shared });
    assert_eq!(func.stack_params.get(&Temp(0)), Some(&0));
    assert_eq!(func.register_params().count(), 0);
  }

  #[test]
  fn address_of_spilled_temp_becomes_slot_address() {
    let mut func = function_from_ir(
      "fn f() {
        t0 <- $3;
        t1 <- &t0;
        ret t1;
      }",
    );
    rewrite_spills(&mut func, &[Temp(0)]);
    let instrs = &func.blocks[0].instrs;
    assert_eq!(instrs[2], Instr::SlotAddr { dest: Temp(1), slot: 0 });
    assert_eq!(instrs[3], Instr::Return(Some(Operand::Temp(Temp(1)))));
  }

  #[test]
  fn nothing_to_spill() {
    let mut func = function_from_ir("fn f() { ret $0; }");
    assert!(rewrite_spills(&mut func, &[]).is_empty());
    assert_eq!(func.num_slots, 0);
  }
}
