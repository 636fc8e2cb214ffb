// The module computes liveness, removes dead code, builds the interference graph
// and colors it, rewriting spilled temps into stack slots.
mod allocation;
mod dce;
mod interference;
mod liveness;
mod spill;

pub use allocation::{color_graph, AllocEvent, ColorAssignment, Coloring, Location, SpillCosts};
pub use dce::{eliminate_dead_code, is_dead, DceOutcome, Eliminated};
pub use interference::InterferenceGraph;
pub use liveness::{BlockLiveness, Liveness};
pub use spill::rewrite_spills;
