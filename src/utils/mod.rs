mod graph;
pub use graph::{Graph, NodeId};
mod minheap;
pub use minheap::MinHeap;
