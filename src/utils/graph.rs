use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

pub type NodeId = usize;

/// Undirected graph stored as an arena:
/// `nodes[i]` is the payload of node i and `adj[i]` the ids connected to it.
#[derive(Clone, Debug)]
pub struct Graph<T: Hash> {
  nodes: Vec<T>,
  index: HashMap<T, NodeId>,
  adj: Vec<BTreeSet<NodeId>>,
}

impl<T: Hash + Eq + Clone + Copy> Graph<T> {
  pub fn new() -> Self {
    Graph {
      nodes: Vec::new(),
      index: HashMap::new(),
      adj: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn contains(&self, node: &T) -> bool {
    self.index.contains_key(node)
  }

  pub fn id(&self, node: &T) -> Option<NodeId> {
    self.index.get(node).copied()
  }

  pub fn node(&self, id: NodeId) -> T {
    self.nodes[id]
  }

  /// All nodes in insertion order
  pub fn nodes(&self) -> &[T] {
    &self.nodes
  }

  /// Idempotently add a node into the graph
  pub fn add_node(&mut self, node: T) -> NodeId {
    if let Some(id) = self.id(&node) {
      return id;
    }
    let id = self.nodes.len();
    self.nodes.push(node);
    self.adj.push(BTreeSet::new());
    self.index.insert(node, id);
    id
  }

  /// Add an edge between node1 and node2. Self-edges are ignored.
  pub fn add_edge(&mut self, node1: T, node2: T) {
    let id1 = self.add_node(node1);
    let id2 = self.add_node(node2);
    if id1 == id2 {
      return;
    }
    self.adj[id1].insert(id2);
    self.adj[id2].insert(id1);
  }

  /// Neighbor ids of a node
  pub fn neighbor_ids(&self, id: NodeId) -> &BTreeSet<NodeId> {
    &self.adj[id]
  }

  /// Return the neighbors of a node
  ///
  /// # Return
  /// If the node does not exist, return None
  pub fn neighbors(&self, node: &T) -> Option<impl Iterator<Item = T> + '_> {
    let id = self.id(node)?;
    Some(self.adj[id].iter().map(|n| self.nodes[*n]))
  }

  pub fn degree(&self, id: NodeId) -> usize {
    self.adj[id].len()
  }

  pub fn has_edge(&self, node1: &T, node2: &T) -> bool {
    match (self.id(node1), self.id(node2)) {
      (Some(id1), Some(id2)) => self.adj[id1].contains(&id2),
      _ => false,
    }
  }

  pub fn num_edges(&self) -> usize {
    self.adj.iter().map(BTreeSet::len).sum::<usize>() / 2
  }
}

impl<T: Hash + Eq + Clone + Copy> Default for Graph<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_add_edges() {
    let mut g = Graph::new();
    g.add_edge(1u32, 2);
    g.add_edge(2, 1);
    g.add_edge(2, 3);
    g.add_node(4);
    assert_eq!(g.len(), 4);
    assert_eq!(g.num_edges(), 2);
    assert!(g.has_edge(&1, &2));
    assert!(g.has_edge(&3, &2));
    assert!(!g.has_edge(&1, &3));
    let id = g.id(&2).unwrap();
    assert_eq!(g.degree(id), 2);
    assert_eq!(g.degree(g.id(&4).unwrap()), 0);
  }

  #[test]
  fn test_no_self_edge() {
    let mut g = Graph::new();
    g.add_edge(7u32, 7);
    assert_eq!(g.len(), 1);
    assert_eq!(g.num_edges(), 0);
  }

  #[test]
  fn test_neighbors() {
    let mut g = Graph::new();
    g.add_edge('a', 'b');
    g.add_edge('a', 'c');
    let mut neigh: Vec<char> = g.neighbors(&'a').unwrap().collect();
    neigh.sort();
    assert_eq!(neigh, vec!['b', 'c']);
    assert!(g.neighbors(&'z').is_none());
  }
}
