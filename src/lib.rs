//! Backend passes over a three-address IR: liveness analysis, dead code
//! elimination and graph-coloring register allocation with spilling.

#[allow(clippy::all, unused_imports)]
mod irtext;

pub mod args;
pub mod asm;
pub mod ast;
pub mod cfg;
pub mod elaboration;
pub mod emit;
pub mod error;
pub mod lex;
pub mod parse;
pub mod pipeline;
pub mod regalloc;
pub mod registers;
pub mod utils;
