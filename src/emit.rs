//! Diagnostic output of the three driver modes.
//!
//! Every report renders the function in the textual IR, so the liveness and
//! DCE listings parse back in. The register allocation report resolves temps
//! to x86-64 register names and spill slots to frame offsets.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::{
  asm::{BlockId, Instr, Operand, Resolve, SlotId, Temp},
  cfg::Function,
  error::{BackendError, Result},
  pipeline::Allocation,
  regalloc::{ColorAssignment, Eliminated, Liveness, Location},
  registers::{reg_from_color, spill_slot_operand, REG_ALLOC_POOL_SIZE},
};

fn set(temps: impl IntoIterator<Item = Temp>) -> String {
  let names: Vec<String> = temps.into_iter().map(|t| t.to_string()).collect();
  names.join(" ")
}

/// Write `fn name(params) { ... }`, with `annotate` called around each block.
fn write_function<R: Resolve>(
  fmt: &mut Formatter,
  func: &Function,
  names: &R,
  params: &[String],
  mut line: impl FnMut(&mut Formatter, BlockId, usize, &Instr) -> fmt::Result,
  mut annotate: impl FnMut(&mut Formatter, BlockId, bool) -> fmt::Result,
) -> fmt::Result {
  writeln!(fmt, "fn {}({}) {{", func.name, params.join(", "))?;
  for block in &func.blocks {
    writeln!(fmt, "{}:", names.block(block.id))?;
    annotate(fmt, block.id, true)?;
    for (idx, instr) in block.instrs.iter().enumerate() {
      line(fmt, block.id, idx, instr)?;
    }
    annotate(fmt, block.id, false)?;
  }
  writeln!(fmt, "}}")
}

fn plain_params(func: &Function) -> Vec<String> {
  func
    .params
    .iter()
    .map(|p| match func.precolored.get(p).and_then(|c| reg_from_color(*c)) {
      Some(reg) => format!("{}: {}", p, reg),
      None => p.to_string(),
    })
    .collect()
}

/// The function in the textual IR.
pub struct Listing<'a>(pub &'a Function);

impl Display for Listing<'_> {
  fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
    let func = self.0;
    write_function(
      fmt,
      func,
      func,
      &plain_params(func),
      |fmt, _, _, instr| writeln!(fmt, "  {};", instr.display(func)),
      |_, _, _| Ok(()),
    )
  }
}

/// Live-in and live-out of every block and the live-after set of every instruction.
pub struct LivenessReport<'a> {
  pub func: &'a Function,
  pub liveness: &'a Liveness,
}

impl Display for LivenessReport<'_> {
  fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
    let (func, liveness) = (self.func, self.liveness);
    writeln!(
      fmt,
      "// liveness of `{}` settled after {} passes",
      func.name,
      liveness.passes()
    )?;
    write_function(
      fmt,
      func,
      func,
      &plain_params(func),
      |fmt, block, idx, instr| {
        writeln!(
          fmt,
          "  {};  // live: {}",
          instr.display(func),
          set(liveness.live_after(block, idx).iter().copied())
        )
      },
      |fmt, block, before| {
        if before && !liveness.is_reachable(block) {
          writeln!(fmt, "  // unreachable")?;
        }
        if before {
          writeln!(fmt, "  // in: {}", set(liveness.live_in(block).iter().copied()))
        } else {
          writeln!(fmt, "  // out: {}", set(liveness.live_out(block).iter().copied()))
        }
      },
    )
  }
}

/// The instruction stream left after dead code elimination.
pub struct DceReport<'a> {
  pub func: &'a Function,
  pub eliminated: &'a [Eliminated],
}

impl Display for DceReport<'_> {
  fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
    write!(fmt, "{}", Listing(self.func))?;
    for removed in self.eliminated {
      writeln!(
        fmt,
        "// removed from {}: {}",
        Resolve::block(self.func, removed.block),
        removed.instr.display(self.func)
      )?;
    }
    writeln!(fmt, "// eliminated {} instructions", self.eliminated.len())
  }
}

/// Resolves temps through a finished assignment.
struct Registers<'a> {
  func: &'a Function,
  assignment: &'a ColorAssignment,
}

impl Registers<'_> {
  fn location(&self, temp: Temp) -> Option<Location> {
    self.assignment.get(&temp)
  }

  /// A move between two temps that landed in the same register.
  fn is_nop(&self, instr: &Instr) -> bool {
    match instr {
      Instr::Mov {
        dest,
        src: Operand::Temp(src),
      } => matches!(
        (self.location(*dest), self.location(*src)),
        (Some(Location::Reg(a)), Some(Location::Reg(b))) if a == b
      ),
      _ => false,
    }
  }
}

impl Resolve for Registers<'_> {
  fn temp(&self, temp: Temp) -> String {
    match self.location(temp) {
      Some(Location::Reg(color)) => {
        reg_from_color(color).map_or_else(|| temp.to_string(), |reg| reg.to_string())
      }
      Some(Location::Spill(slot)) => spill_slot_operand(slot),
      None => temp.to_string(),
    }
  }

  fn block(&self, block: BlockId) -> String {
    Resolve::block(self.func, block)
  }

  fn slot(&self, slot: SlotId) -> String {
    spill_slot_operand(slot)
  }
}

/// `NUM_COLORS=K`, the allocation trace, then the function in physical registers.
pub struct RegAllocReport<'a> {
  alloc: &'a Allocation,
  num_colors: usize,
}

impl<'a> RegAllocReport<'a> {
  /// Fails when a color has no register to name it.
  pub fn new(alloc: &'a Allocation, num_colors: usize) -> Result<Self> {
    match alloc.assignment.largest_used_color() {
      Some(color) if color >= REG_ALLOC_POOL_SIZE => Err(BackendError::config(format!(
        "color {} of `{}` has no register, the pool holds {}",
        color, alloc.function.name, REG_ALLOC_POOL_SIZE
      ))),
      _ => Ok(RegAllocReport { alloc, num_colors }),
    }
  }
}

impl Display for RegAllocReport<'_> {
  fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
    let func = &self.alloc.function;
    let names = Registers {
      func,
      assignment: &self.alloc.assignment,
    };

    writeln!(fmt, "NUM_COLORS={}", self.num_colors)?;
    for round in &self.alloc.rounds {
      writeln!(
        fmt,
        "// round {}: {} nodes, {} edges, {} eliminated",
        round.round,
        round.nodes,
        round.edges,
        round.eliminated.len()
      )?;
      for event in &round.trace {
        writeln!(fmt, "//   {}", event)?;
      }
    }

    let params: Vec<String> = func.params.iter().map(|p| names.temp(*p)).collect();
    write_function(
      fmt,
      func,
      &names,
      &params,
      |fmt, _, _, instr| {
        if names.is_nop(instr) {
          return Ok(());
        }
        writeln!(fmt, "  {};", instr.display(&names))
      },
      |_, _, _| Ok(()),
    )
  }
}

#[derive(Serialize)]
struct AssignmentDump<'a> {
  function: &'a str,
  num_colors: usize,
  rounds: usize,
  spill_slots: SlotId,
  assignment: &'a ColorAssignment,
}

/// The final assignment of one function as JSON.
pub fn assignment_json(alloc: &Allocation, num_colors: usize) -> Result<String> {
  let dump = AssignmentDump {
    function: &alloc.function.name,
    num_colors,
    rounds: alloc.rounds.len(),
    spill_slots: alloc.function.num_slots,
    assignment: &alloc.assignment,
  };
  serde_json::to_string_pretty(&dump).map_err(|e| {
    BackendError::internal(
      &alloc.function.name,
      format!("cannot serialize the assignment: {}", e),
      None,
    )
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    elaboration::function_from_ir,
    parse::parser::parse_string,
    pipeline::{allocate, run_dce, PassContext},
  };

  const STRAIGHT: &str = "fn f(t0: %rdi) {
    t1 <- t0 + $1;
    t2 <- t0 * t0;
    ret t1;
  }";

  #[test]
  fn listing_parses_back() {
    let func = function_from_ir(STRAIGHT);
    let text = Listing(&func).to_string();
    assert!(text.starts_with("fn f(t0: %rdi) {\nf.entry:\n"), "{}", text);
    let again = parse_string(&text).unwrap();
    assert_eq!(again[0].num_instrs(), 3);
  }

  #[test]
  fn liveness_report_shows_sets() {
    let mut func = function_from_ir(STRAIGHT);
    let ctx = PassContext {
      dead_code_elim: false,
      ..PassContext::default()
    };
    let (liveness, _) = run_dce(&mut func, &ctx).unwrap();
    let text = LivenessReport {
      func: &func,
      liveness: &liveness,
    }
    .to_string();
    assert!(text.contains("// in: t0\n"), "{}", text);
    assert!(text.contains("t1 <- t0 + $1;  // live: t0 t1\n"), "{}", text);
    assert!(text.contains("t2 <- t0 * t0;  // live: t1\n"), "{}", text);
    assert!(text.contains("// out: \n"), "{}", text);
    assert!(parse_string(&text).is_ok());
  }

  #[test]
  fn dce_report_counts_removals() {
    let mut func = function_from_ir(STRAIGHT);
    let (_, eliminated) = run_dce(&mut func, &PassContext::default()).unwrap();
    let text = DceReport {
      func: &func,
      eliminated: &eliminated,
    }
    .to_string();
    assert!(!text.contains("  t2 <- t0 * t0;"), "{}", text);
    assert!(text.contains("// removed from f.entry: t2 <- t0 * t0\n"), "{}", text);
    assert!(text.ends_with("// eliminated 1 instructions\n"), "{}", text);
  }

  #[test]
  fn regalloc_report_names_registers() {
    let func = function_from_ir(
      "fn g(t0: %rdi) {
        t1 <- t0 + $1;
        t2 <- t1;
        ret t2;
      }",
    );
    let alloc = allocate(func, &PassContext::default()).unwrap();
    let text = RegAllocReport::new(&alloc, 4).unwrap().to_string();
    assert!(text.starts_with("NUM_COLORS=4\n"), "{}", text);
    assert!(text.contains("fn g(%rdi) {"), "{}", text);
    assert!(text.contains("  %rax <- %rdi + $1;\n"), "{}", text);
    // t1 and t2 share %rax, so the copy disappears
    assert!(!text.contains("%rax <- %rax"), "{}", text);
    assert!(text.contains("  ret %rax;\n"), "{}", text);
  }

  #[test]
  fn spills_render_as_frame_offsets() {
    let func = function_from_ir("fn h() { t0 <- spill_load slot1; spill_store slot0 <- t0; ret t0; }");
    let alloc = allocate(func, &PassContext::default()).unwrap();
    let text = RegAllocReport::new(&alloc, 4).unwrap().to_string();
    assert!(text.contains("%rax <- spill_load -16(%rbp);"), "{}", text);
    assert!(text.contains("spill_store -8(%rbp) <- %rax;"), "{}", text);
  }

  #[test]
  fn colors_beyond_the_pool_are_rejected() {
    let func = function_from_ir("fn p(t0: %r15) { ret t0; }");
    let ctx = PassContext {
      num_colors: 20,
      ..PassContext::default()
    };
    let mut alloc = allocate(func, &ctx).unwrap();
    alloc.assignment.insert(Temp(9), Location::Reg(15));
    assert!(matches!(
      RegAllocReport::new(&alloc, 20),
      Err(BackendError::Config(_))
    ));
  }

  #[test]
  fn json_dump_carries_the_assignment() {
    let func = function_from_ir(STRAIGHT);
    let alloc = allocate(func, &PassContext::default()).unwrap();
    let json = assignment_json(&alloc, 4).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["function"], "f");
    assert_eq!(value["num_colors"], 4);
    assert_eq!(value["assignment"]["0"]["Reg"], 1);
  }
}
