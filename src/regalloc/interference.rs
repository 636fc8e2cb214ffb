use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{
  asm::Temp,
  cfg::{Color, Function},
  error::{BackendError, Result},
  regalloc::liveness::Liveness,
  utils::{Graph, NodeId},
};

// Represent the interference graph built from the IR and its liveness.
#[derive(Debug, Clone)]
pub struct InterferenceGraph {
  graph: Graph<Temp>,
  /// Temps with a fixed color
  precolored: BTreeMap<Temp, Color>,
  /// `(dest, src)` of every temp-to-temp copy
  copies: BTreeSet<(Temp, Temp)>,
}

#[derive(Serialize)]
struct GraphDump<'a> {
  function: &'a str,
  nodes: Vec<NodeDump>,
  copies: Vec<(Temp, Temp)>,
}

#[derive(Serialize)]
struct NodeDump {
  temp: Temp,
  precolored: Option<Color>,
  neighbors: Vec<Temp>,
}

impl InterferenceGraph {
  /// Build the interference graph from the liveness analysis result.
  pub fn build(func: &Function, liveness: &Liveness) -> Self {
    let mut graph = Graph::new();
    let mut copies = BTreeSet::new();

    for param in func.register_params() {
      graph.add_node(param);
    }
    for temp in func.precolored.keys() {
      graph.add_node(*temp);
    }

    // parameters and anything read before its definition are all defined on entry
    let entry_live = liveness.entry_live_in();
    for def in func.register_params().chain(entry_live.iter().copied()) {
      for live in entry_live {
        graph.add_edge(def, *live);
      }
    }

    for block in func.blocks.iter().filter(|b| liveness.is_reachable(b.id)) {
      for (idx, instr) in block.instrs.iter().enumerate() {
        for temp in instr.uses() {
          graph.add_node(temp);
        }
        let Some(def) = instr.dest() else {
          continue;
        };
        graph.add_node(def);

        let copy_src = instr.copy_pair().map(|(_, src)| src);
        if let Some((dest, src)) = instr.copy_pair() {
          copies.insert((dest, src));
        }
        for live in liveness.live_after(block.id, idx) {
          if *live != def && Some(*live) != copy_src {
            graph.add_edge(def, *live);
          }
        }
      }
    }

    log::debug!(
      "interference graph of `{}`: {} nodes, {} edges",
      func.name,
      graph.len(),
      graph.num_edges()
    );

    InterferenceGraph {
      graph,
      precolored: func.precolored.clone(),
      copies,
    }
  }

  /// Pre-colored nodes must fit in the register budget and never share a
  /// color with a pre-colored neighbor.
  pub fn check_precolored(&self, k: usize, func: &Function) -> Result<()> {
    for (temp, color) in &self.precolored {
      if *color >= k {
        return Err(BackendError::config(format!(
          "{} in `{}` is pinned to color {} but only {} colors are available",
          temp, func.name, color, k
        )));
      }
    }

    for (temp, color) in &self.precolored {
      for neigh in self.neighbors(temp) {
        if neigh > *temp && self.precolored.get(&neigh) == Some(color) {
          return Err(BackendError::internal(
            &func.name,
            format!("pre-colored {} and {} interfere but share color {}", temp, neigh, color),
            Some(self.to_json(&func.name)),
          ));
        }
      }
    }
    Ok(())
  }

  pub fn graph(&self) -> &Graph<Temp> {
    &self.graph
  }

  pub fn precolored(&self) -> &BTreeMap<Temp, Color> {
    &self.precolored
  }

  pub fn copies(&self) -> &BTreeSet<(Temp, Temp)> {
    &self.copies
  }

  pub fn contains(&self, temp: &Temp) -> bool {
    self.graph.contains(temp)
  }

  pub fn id(&self, temp: &Temp) -> Option<NodeId> {
    self.graph.id(temp)
  }

  /// All nodes, lowest temp first
  pub fn temps(&self) -> Vec<Temp> {
    let mut temps = self.graph.nodes().to_vec();
    temps.sort();
    temps
  }

  /// Neighbors of a temp, lowest first. Empty if the temp is not a node.
  pub fn neighbors(&self, temp: &Temp) -> Vec<Temp> {
    let mut neighbors: Vec<Temp> = self
      .graph
      .neighbors(temp)
      .map(|it| it.collect())
      .unwrap_or_default();
    neighbors.sort();
    neighbors
  }

  pub fn degree(&self, temp: &Temp) -> usize {
    self.id(temp).map_or(0, |id| self.graph.degree(id))
  }

  pub fn interferes(&self, a: &Temp, b: &Temp) -> bool {
    self.graph.has_edge(a, b)
  }

  pub fn num_nodes(&self) -> usize {
    self.graph.len()
  }

  pub fn num_edges(&self) -> usize {
    self.graph.num_edges()
  }

  /// Graph state as JSON, attached to internal errors.
  pub fn to_json(&self, function: &str) -> String {
    let dump = GraphDump {
      function,
      nodes: self
        .temps()
        .into_iter()
        .map(|temp| NodeDump {
          temp,
          precolored: self.precolored.get(&temp).copied(),
          neighbors: self.neighbors(&temp),
        })
        .collect(),
      copies: self.copies.iter().copied().collect(),
    };
    serde_json::to_string_pretty(&dump).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{elaboration::function_from_ir, pipeline::PassContext};

  fn build(src: &str) -> (Function, InterferenceGraph) {
    let func = function_from_ir(src);
    let liveness = Liveness::analyze(&func, &PassContext::default()).unwrap();
    let graph = InterferenceGraph::build(&func, &liveness);
    (func, graph)
  }

  #[test]
  fn simultaneously_live_temps_interfere() {
    let (_, g) = build(
      "fn f(t0) {
        t1 <- t0 + $1;
        t2 <- t0 + $2;
        t3 <- t1 + t2;
        t4 <- t3 + t0;
        ret t4;
      }",
    );
    assert!(g.interferes(&Temp(1), &Temp(0)));
    assert!(g.interferes(&Temp(2), &Temp(0)));
    assert!(g.interferes(&Temp(2), &Temp(1)));
    assert!(g.interferes(&Temp(3), &Temp(0)));
    assert!(!g.interferes(&Temp(3), &Temp(1)));
    assert!(!g.interferes(&Temp(4), &Temp(0)));
    assert_eq!(g.degree(&Temp(4)), 0);
    assert!(g.contains(&Temp(4)));
  }

  #[test]
  fn copies_do_not_interfere_with_their_source() {
    let (_, g) = build(
      "fn f(t0) {
        t1 <- t0;
        t2 <- t0 + t1;
        ret t2;
      }",
    );
    assert!(!g.interferes(&Temp(1), &Temp(0)));
    assert!(g.copies().contains(&(Temp(1), Temp(0))));
  }

  #[test]
  fn no_self_edges() {
    let (_, g) = build(
      "fn f(t0) {
        t0 <- t0 + $1;
        ret t0;
      }",
    );
    assert!(!g.interferes(&Temp(0), &Temp(0)));
    assert_eq!(g.num_edges(), 0);
  }

  #[test]
  fn entry_live_temps_interfere_pairwise() {
    let (_, g) = build(
      "fn f(t0, t1, t2) {
        t3 <- t0 + t1;
        t4 <- t3 + t2;
        ret t4;
      }",
    );
    assert!(g.interferes(&Temp(0), &Temp(1)));
    assert!(g.interferes(&Temp(0), &Temp(2)));
    assert!(g.interferes(&Temp(1), &Temp(2)));
  }

  #[test]
  fn precolor_checks() {
    let src = "fn f(t0: %rdi, t1: %rdi) {
        t2 <- t0 + t1;
        ret t2;
      }";
    let (func, g) = build(src);
    // %rdi is color 1
    assert!(!g.check_precolored(1, &func).unwrap_err().is_fatal());
    let err = g.check_precolored(4, &func).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.postmortem().unwrap().contains("\"precolored\": 1"));
  }

  #[test]
  fn graph_dump_lists_copies() {
    let (_, g) = build(
      "fn f(t0) {
        t1 <- t0;
        t2 <- t1 + $1;
        ret t2;
      }",
    );
    let dump: serde_json::Value = serde_json::from_str(&g.to_json("f")).unwrap();
    assert_eq!(dump["copies"], serde_json::json!([[1, 0]]));
    assert_eq!(dump["nodes"].as_array().unwrap().len(), 3);
  }
}
