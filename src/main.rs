//! Top Level Environment
//! Reads a textual IR file and prints, per function, the requested report.

use std::fs;
use std::thread;
use std::time;

use anyhow::{Context, Result};
use colorc::args::{self, Config, EmitTarget};
use colorc::cfg::Function;
use colorc::elaboration::elab_program;
use colorc::emit::{assignment_json, DceReport, LivenessReport, RegAllocReport};
use colorc::error::BackendError;
use colorc::parse::parser;
use colorc::pipeline::{allocate, run_dce, PassContext};
use colorc::regalloc::Liveness;
use colorc::registers::REG_ALLOC_POOL_SIZE;

// Helper macro to time evaluating an expression (like a function call.)
macro_rules! time {
  ( $x:expr ) => {{
    let t1 = time::Instant::now();
    let result = $x;
    (result, t1.elapsed())
  }};
}

fn main() {
  // We call with a large stack to avoid any overflows on large inputs.
  let child = thread::Builder::new()
    .stack_size(128 * 1024 * 1024)
    .spawn(run);
  let code = match child {
    Ok(handle) => handle.join().unwrap_or(1),
    Err(e) => {
      eprintln!("couldn't spawn the compiler thread: {}", e);
      1
    }
  };
  std::process::exit(code);
}

fn run() -> i32 {
  let cfg = match args::parse_args() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("{}", e);
      return 1;
    }
  };

  // make envlogger stdout
  let mut logger = env_logger::builder();
  logger
    .target(env_logger::Target::Stdout)
    .format_timestamp(None);
  if cfg.verbose {
    logger.filter_level(log::LevelFilter::Info);
  }
  logger.init();

  match compile(&cfg) {
    Ok(code) => code,
    Err(e) => {
      eprintln!("{:#}", e);
      1
    }
  }
}

/// Run every function of the input through the passes. Returns the exit code.
fn compile(cfg: &Config) -> Result<i32> {
  let source = fs::read_to_string(&cfg.file)
    .with_context(|| format!("couldn't read {}", cfg.file.display()))?;

  let ctx = cfg.backend.pass_context()?;
  if cfg.emit == EmitTarget::RegAlloc && ctx.num_colors > REG_ALLOC_POOL_SIZE {
    return Err(
      BackendError::config(format!(
        "{} colors requested but only {} registers can be named",
        ctx.num_colors, REG_ALLOC_POOL_SIZE
      ))
      .into(),
    );
  }

  let (program, parse_time) = time!(parser::parse_string(&source));
  let program = match program {
    Ok(program) => program,
    Err(e) => {
      eprintln!("{}", e);
      return Ok(1); // Parse failed!
    }
  };
  log::info!("Parse time: {} us", parse_time.as_micros());

  let mut failed = false;
  for (name, func) in elab_program(program, cfg.backend.precolor_params) {
    let (report, pass_time) = time!(func.and_then(|func| process(func, cfg, &ctx)));
    match report {
      Ok(text) => {
        log::info!("`{}`: {} us", name, pass_time.as_micros());
        print!("{}", text);
      }
      Err(e) if e.is_fatal() => {
        eprintln!("{}", e);
        if let Some(state) = e.postmortem() {
          eprintln!("{}", state);
        }
        return Ok(1);
      }
      Err(e) => {
        eprintln!("{}", e);
        failed = true;
      }
    }
  }
  Ok(failed as i32)
}

fn process(mut func: Function, cfg: &Config, ctx: &PassContext) -> colorc::error::Result<String> {
  match cfg.emit {
    EmitTarget::Liveness => {
      let liveness = Liveness::analyze(&func, ctx)?;
      Ok(
        LivenessReport {
          func: &func,
          liveness: &liveness,
        }
        .to_string(),
      )
    }
    EmitTarget::Dce => {
      let (_, eliminated) = run_dce(&mut func, ctx)?;
      Ok(
        DceReport {
          func: &func,
          eliminated: &eliminated,
        }
        .to_string(),
      )
    }
    EmitTarget::RegAlloc => {
      let alloc = allocate(func, ctx)?;
      let mut text = RegAllocReport::new(&alloc, ctx.num_colors)?.to_string();
      if cfg.dump_json {
        text.push_str(&assignment_json(&alloc, ctx.num_colors)?);
        text.push('\n');
      }
      Ok(text)
    }
  }
}
