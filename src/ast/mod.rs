mod surface_prog;

use std::fmt::{Display, Error, Formatter};

pub use surface_prog::*;

impl Display for SurfaceParam {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match &self.reg {
      Some(reg) => write!(fmt, "{}: {}", self.temp, reg),
      None => write!(fmt, "{}", self.temp),
    }
  }
}

impl SurfaceFunction {
  pub fn num_instrs(&self) -> usize {
    self
      .body
      .iter()
      .filter(|line| matches!(line, SurfaceLine::Instr(_)))
      .count()
  }
}
