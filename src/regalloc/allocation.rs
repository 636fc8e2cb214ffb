use std::{
  collections::{BTreeMap, BTreeSet, HashMap},
  fmt,
};

use serde::Serialize;

use crate::{
  asm::{SlotId, Temp},
  cfg::{Color, Function},
  error::{BackendError, Result},
  regalloc::InterferenceGraph,
  utils::MinHeap,
};

/// Base of the per-occurrence spill cost; an occurrence at loop depth d costs 10^d.
const LOOP_WEIGHT: f64 = 10.0;

/// One decision of the simplify/spill/select loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocEvent {
  /// Removed with fewer than K neighbors left
  Simplify { temp: Temp, degree: usize },
  /// Removed optimistically as the cheapest spill
  SpillCandidate { temp: Temp, weight: f64 },
  Assign { temp: Temp, color: Color },
  /// No color left below K
  Spill { temp: Temp },
}

impl fmt::Display for AllocEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AllocEvent::Simplify { temp, degree } => write!(f, "simplify {} (degree {})", temp, degree),
      AllocEvent::SpillCandidate { temp, weight } => {
        write!(f, "potential spill {} (weight {:.2})", temp, weight)
      }
      AllocEvent::Assign { temp, color } => write!(f, "assign {} -> {}", temp, color),
      AllocEvent::Spill { temp } => write!(f, "spill {}", temp),
    }
  }
}

/// Result of one coloring attempt
#[derive(Debug, Clone, Default)]
pub struct Coloring {
  pub colors: BTreeMap<Temp, Color>,
  /// Actual spills, lowest temp first
  pub spilled: Vec<Temp>,
  pub trace: Vec<AllocEvent>,
}

/// Spill cost of every temp: the sum over its defs and uses of 10^loop-depth.
#[derive(Debug, Clone, Default)]
pub struct SpillCosts(BTreeMap<Temp, f64>);

impl SpillCosts {
  pub fn compute(func: &Function) -> Self {
    let depths = func.loop_depths();
    let reachable = func.reachable();
    let mut costs: BTreeMap<Temp, f64> = BTreeMap::new();

    // parameters are defined once on entry
    for param in func.register_params() {
      *costs.entry(param).or_default() += 1.0;
    }
    for block in func.blocks.iter().filter(|b| reachable[b.id]) {
      let weight = LOOP_WEIGHT.powi(depths[block.id] as i32);
      for instr in &block.instrs {
        for temp in instr.dest().into_iter().chain(instr.uses()) {
          *costs.entry(temp).or_default() += weight;
        }
      }
    }

    for temp in &func.spill_temps {
      costs.insert(*temp, f64::INFINITY);
    }
    SpillCosts(costs)
  }

  pub fn cost(&self, temp: &Temp) -> f64 {
    self.0.get(temp).copied().unwrap_or(0.0)
  }
}

/// Where a temp lives once allocation is done.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Location {
  Reg(Color),
  Spill(SlotId),
}

/// The allocation of temps to registers or stack slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorAssignment(BTreeMap<Temp, Location>);

impl ColorAssignment {
  pub fn insert(&mut self, temp: Temp, location: Location) {
    self.0.insert(temp, location);
  }

  pub fn get(&self, temp: &Temp) -> Option<Location> {
    self.0.get(temp).copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Temp, &Location)> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Largest color handed out, if any temp got a register.
  pub fn largest_used_color(&self) -> Option<Color> {
    self
      .0
      .values()
      .filter_map(|loc| match loc {
        Location::Reg(color) => Some(*color),
        Location::Spill(_) => None,
      })
      .max()
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// Color the graph with at most `k` colors, Chaitin/Briggs style.
///
/// Pre-colored nodes keep their color and are never removed. Every other
/// node either gets a color below `k` or ends up in `Coloring::spilled`.
pub fn color_graph(
  igraph: &InterferenceGraph,
  costs: &SpillCosts,
  k: usize,
  func: &Function,
) -> Result<Coloring> {
  let mut trace = vec![];
  let graph = igraph.graph();
  let precolored = igraph.precolored();

  // simplify
  let mut degrees: HashMap<Temp, usize> = igraph
    .temps()
    .into_iter()
    .map(|temp| (temp, igraph.degree(&temp)))
    .collect();
  let mut remaining: BTreeSet<Temp> = igraph
    .temps()
    .into_iter()
    .filter(|temp| !precolored.contains_key(temp))
    .collect();
  let mut stack: Vec<Temp> = Vec::with_capacity(remaining.len());

  while !remaining.is_empty() {
    let low = remaining.iter().find(|temp| degrees[*temp] < k).copied();
    let picked = match low {
      Some(temp) => {
        trace.push(AllocEvent::Simplify {
          temp,
          degree: degrees[&temp],
        });
        temp
      }
      None => {
        // every remaining degree is at least k >= 1
        let (temp, weight) = remaining
          .iter()
          .map(|temp| (*temp, costs.cost(temp) / degrees[temp] as f64))
          .min_by(|(_, w1), (_, w2)| w1.total_cmp(w2))
          .ok_or_else(|| BackendError::internal(&func.name, "empty spill candidate set", None))?;
        trace.push(AllocEvent::SpillCandidate { temp, weight });
        temp
      }
    };

    remaining.remove(&picked);
    stack.push(picked);
    for neigh in igraph.neighbors(&picked) {
      if let Some(degree) = degrees.get_mut(&neigh) {
        *degree = degree.saturating_sub(1);
      }
    }
  }

  // select
  let mut colors: BTreeMap<Temp, Color> = precolored.clone();
  let mut spilled = vec![];
  while let Some(temp) = stack.pop() {
    let id = igraph
      .id(&temp)
      .ok_or_else(|| BackendError::internal(&func.name, format!("{} is not a node", temp), None))?;
    let mut heap: MinHeap<Color> = graph
      .neighbor_ids(id)
      .iter()
      .filter_map(|n| colors.get(&graph.node(*n)).copied())
      .collect();
    let color = heap.find_smallest_absent();

    if color < k {
      colors.insert(temp, color);
      trace.push(AllocEvent::Assign { temp, color });
    } else if func.spill_temps.contains(&temp) {
      return Err(BackendError::internal(
        &func.name,
        format!(
          "spill temp {} cannot be colored: more than {} operands are live at once",
          temp, k
        ),
        Some(igraph.to_json(&func.name)),
      ));
    } else {
      spilled.push(temp);
      trace.push(AllocEvent::Spill { temp });
    }
  }
  spilled.sort();

  log::debug!(
    "coloring of `{}` with {} colors: {} colored, {} spilled",
    func.name,
    k,
    colors.len(),
    spilled.len()
  );

  Ok(Coloring {
    colors,
    spilled,
    trace,
  })
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;
  use crate::{elaboration::function_from_ir, pipeline::PassContext, regalloc::Liveness};

  fn color(src: &str, k: usize) -> (InterferenceGraph, Result<Coloring>) {
    let func = function_from_ir(src);
    let liveness = Liveness::analyze(&func, &PassContext::default()).unwrap();
    let igraph = InterferenceGraph::build(&func, &liveness);
    let costs = SpillCosts::compute(&func);
    let coloring = color_graph(&igraph, &costs, k, &func);
    (igraph, coloring)
  }

  fn assert_valid(igraph: &InterferenceGraph, coloring: &Coloring, k: usize) {
    for temp in igraph.temps() {
      if coloring.spilled.contains(&temp) {
        assert!(!coloring.colors.contains_key(&temp));
        continue;
      }
      let c = coloring.colors[&temp];
      assert!(c < k);
      for neigh in igraph.neighbors(&temp) {
        assert_ne!(coloring.colors.get(&neigh), Some(&c), "{} and {}", temp, neigh);
      }
    }
  }

  const CLIQUE4: &str = "fn f(t0, t1, t2, t3) {
      t4 <- t0 + t1;
      t5 <- t2 + t3;
      t6 <- t4 + t5;
      ret t6;
    }";

  #[rstest]
  #[case(4, 0)]
  #[case(3, 1)]
  #[case(2, 2)]
  #[case(1, 4)]
  fn clique_spills_what_does_not_fit(#[case] k: usize, #[case] spills: usize) {
    let (igraph, coloring) = color(CLIQUE4, k);
    let coloring = coloring.unwrap();
    assert_eq!(coloring.spilled.len(), spills);
    assert_valid(&igraph, &coloring, k);
  }

  #[test]
  fn simplify_takes_lowest_temp_first() {
    let (_, coloring) = color(
      "fn f(t0) {
        t1 <- t0 + $1;
        t2 <- t1 + $1;
        ret t2;
      }",
      2,
    );
    let coloring = coloring.unwrap();
    assert_eq!(
      coloring.trace[0],
      AllocEvent::Simplify {
        temp: Temp(0),
        degree: 0
      }
    );
    assert!(coloring.spilled.is_empty());
  }

  #[test]
  fn cheapest_temp_is_the_spill_candidate() {
    // t0 is read inside the loop, t1 and t2 only outside
    let (_, coloring) = color(
      "fn f(t0, t1, t2) {
      entry:
        t3 <- $0;
      head:
        if t3 < t0 goto body else done;
      body:
        t3 <- t3 + $1;
        goto head;
      done:
        t4 <- t1 + t2;
        ret t4;
      }",
      2,
    );
    let coloring = coloring.unwrap();
    let first = coloring
      .trace
      .iter()
      .find_map(|e| match e {
        AllocEvent::SpillCandidate { temp, .. } => Some(*temp),
        _ => None,
      })
      .unwrap();
    assert_ne!(first, Temp(0));
    assert_ne!(first, Temp(3));
  }

  #[test]
  fn precolored_nodes_keep_their_color() {
    let (igraph, coloring) = color(
      "fn f(t0: %rsi, t1) {
        t2 <- t0 + t1;
        ret t2;
      }",
      3,
    );
    let coloring = coloring.unwrap();
    assert_eq!(coloring.colors[&Temp(0)], 2);
    assert_valid(&igraph, &coloring, 3);
    assert_eq!(coloring.colors[&Temp(1)], 0);
  }

  #[test]
  fn costs_grow_with_loop_depth() {
    let func = function_from_ir(
      "fn f(t0) {
      entry:
        t1 <- $0;
      head:
        if t1 < t0 goto body else done;
      body:
        t1 <- t1 + $1;
        goto head;
      done:
        ret t1;
      }",
    );
    let costs = SpillCosts::compute(&func);
    // param def + use in head
    assert_eq!(costs.cost(&Temp(0)), 11.0);
    // entry def, head use, body def and use, done use
    assert_eq!(costs.cost(&Temp(1)), 1.0 + 10.0 + 20.0 + 1.0);
  }

  #[test]
  fn assignment_serializes_by_temp() {
    let mut assignment = ColorAssignment::default();
    assignment.insert(Temp(1), Location::Reg(0));
    assignment.insert(Temp(4), Location::Spill(0));
    let json = serde_json::to_string(&assignment).unwrap();
    assert_eq!(json, r#"{"1":{"Reg":0},"4":{"Spill":0}}"#);
    assert_eq!(assignment.largest_used_color(), Some(0));
  }
}
