//! Parse command line arguments and the backend configuration file.
//! Values from the command line override the config file, which overrides
//! the defaults compiled in from `backend.toml`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::{
  error::{BackendError, Result},
  pipeline::PassContext,
};

lazy_static! {
  pub static ref DEFAULT_CONFIG: BackendConfig =
    toml::from_str(include_str!("../backend.toml")).unwrap_or_default();
}

/// What the driver prints for each function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmitTarget {
  Liveness,
  Dce,
  RegAlloc,
}

#[derive(Parser, Debug)]
#[command(version, about = "Liveness, dead code elimination and register allocation for a three-address IR", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["liveness", "dce", "regalloc"])))]
pub struct Cli {
  /// IR file to compile
  pub file: PathBuf,

  /// Print live-in/live-out sets and per-instruction live-after sets
  #[arg(long)]
  pub liveness: bool,

  /// Print the instruction stream after dead code elimination
  #[arg(long)]
  pub dce: bool,

  /// Print the register allocation (the default)
  #[arg(short = 's', long)]
  pub regalloc: bool,

  /// Number of available registers (1 to 13). With 1, no instruction may read two temps
  #[arg(short = 'k', long, allow_hyphen_values = true)]
  pub num_colors: Option<i64>,

  /// Skip dead code elimination before allocation
  #[arg(long)]
  pub no_dce: bool,

  /// Backend options in TOML
  #[arg(long, value_name = "TOML")]
  pub config: Option<PathBuf>,

  /// Also print the color assignment as JSON
  #[arg(long)]
  pub dump_json: bool,

  /// Pin the first six parameters to the argument registers
  #[arg(long)]
  pub precolor_params: bool,

  /// Log pass progress
  #[arg(short, long)]
  pub verbose: bool,
}

/// Configuration options for the backend passes.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BackendConfig {
  pub num_colors: i64,
  pub dead_code_elim: bool,
  pub max_iterations: usize,
  pub max_rounds: Option<usize>,
  pub precolor_params: bool,
}

impl Default for BackendConfig {
  fn default() -> Self {
    BackendConfig {
      num_colors: 4,
      dead_code_elim: true,
      max_iterations: 10_000,
      max_rounds: None,
      precolor_params: false,
    }
  }
}

impl BackendConfig {
  pub fn from_toml(text: &str) -> Result<Self> {
    toml::from_str(text).map_err(|e| BackendError::config(format!("invalid backend config: {}", e)))
  }

  pub fn from_file(path: &std::path::Path) -> Result<Self> {
    let text = std::fs::read_to_string(path)
      .map_err(|e| BackendError::config(format!("cannot read {}: {}", path.display(), e)))?;
    Self::from_toml(&text)
  }

  /// Check the register budget and produce the context handed to every pass.
  pub fn pass_context(&self) -> Result<PassContext> {
    if self.num_colors < 1 {
      return Err(BackendError::config(format!(
        "number of colors must be at least 1, got {}",
        self.num_colors
      )));
    }
    let ctx = PassContext {
      num_colors: self.num_colors as usize,
      dead_code_elim: self.dead_code_elim,
      max_iterations: self.max_iterations,
      max_rounds: self.max_rounds,
    };
    ctx.validate()?;
    Ok(ctx)
  }
}

/// Configuration options for this compiler run.
#[derive(Debug, Clone)]
pub struct Config {
  pub file: PathBuf,
  pub emit: EmitTarget,
  pub backend: BackendConfig,
  pub dump_json: bool,
  pub verbose: bool,
}

impl Cli {
  /// Merge the command line over the config file (or the built-in defaults).
  pub fn into_config(self) -> Result<Config> {
    let mut backend = match &self.config {
      Some(path) => BackendConfig::from_file(path)?,
      None => DEFAULT_CONFIG.clone(),
    };
    if let Some(k) = self.num_colors {
      backend.num_colors = k;
    }
    if self.no_dce {
      backend.dead_code_elim = false;
    }
    if self.precolor_params {
      backend.precolor_params = true;
    }

    let emit = if self.liveness {
      EmitTarget::Liveness
    } else if self.dce {
      EmitTarget::Dce
    } else {
      EmitTarget::RegAlloc
    };

    Ok(Config {
      file: self.file,
      emit,
      backend,
      dump_json: self.dump_json,
      verbose: self.verbose,
    })
  }
}

/// Parses command line input into a configuration.
pub fn parse_args() -> Result<Config> {
  Cli::parse().into_config()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("colorc").chain(args.iter().copied())).unwrap()
  }

  #[test]
  fn builtin_defaults_parse() {
    assert_eq!(*DEFAULT_CONFIG, BackendConfig::default());
  }

  #[test]
  fn flags_override_defaults() {
    let config = cli(&["prog.ir", "-s", "--num-colors", "2", "--no-dce"])
      .into_config()
      .unwrap();
    assert_eq!(config.emit, EmitTarget::RegAlloc);
    assert_eq!(config.backend.num_colors, 2);
    assert!(!config.backend.dead_code_elim);
    let ctx = config.backend.pass_context().unwrap();
    assert_eq!(ctx.num_colors, 2);
  }

  #[test]
  fn non_positive_k_is_rejected() {
    for k in ["0", "-3"] {
      let config = cli(&["prog.ir", "--num-colors", k]).into_config().unwrap();
      let err = config.backend.pass_context().unwrap_err();
      assert!(matches!(err, BackendError::Config(_)));
    }
  }

  #[test]
  fn modes_are_exclusive() {
    assert!(Cli::try_parse_from(["colorc", "a.ir", "--liveness", "--dce"]).is_err());
    let config = cli(&["a.ir", "--liveness"]).into_config().unwrap();
    assert_eq!(config.emit, EmitTarget::Liveness);
  }

  #[test]
  fn config_file_values() {
    let config = BackendConfig::from_toml("num_colors = 3\nmax_rounds = 5\n").unwrap();
    assert_eq!(config.num_colors, 3);
    assert_eq!(config.max_rounds, Some(5));
    assert!(config.dead_code_elim);
    assert!(BackendConfig::from_toml("colours = 3").is_err());
  }
}
