use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct MinHeap<T: Ord>(BinaryHeap<Reverse<T>>);

impl<T: Ord> MinHeap<T> {
  pub fn new() -> Self {
    MinHeap(BinaryHeap::<Reverse<T>>::new())
  }

  pub fn push(&mut self, item: T) {
    self.0.push(Reverse(item));
  }

  pub fn pop(&mut self) -> Option<T> {
    self.0.pop().map(|v| v.0)
  }
}

impl<T: Ord> Default for MinHeap<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    MinHeap(iter.into_iter().map(Reverse).collect())
  }
}

impl MinHeap<usize> {
  /// Smallest value not present in the heap. Drains the heap.
  pub fn find_smallest_absent(&mut self) -> usize {
    let mut i = 0;
    while let Some(v) = self.pop() {
      if v < i {
        // duplicate of a value already seen
        continue;
      }
      if v != i {
        return i;
      }
      i += 1;
    }
    i
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_minheap() {
    let mut heap = MinHeap::new();
    heap.push(3);
    heap.push(1);
    heap.push(2);
    heap.push(0);
    assert_eq!(heap.find_smallest_absent(), 4);
  }

  #[test]
  fn test_minheap_gap() {
    let mut heap: MinHeap<usize> = [3, 1, 0, 1, 0].into_iter().collect();
    assert_eq!(heap.find_smallest_absent(), 2);
  }

  #[test]
  fn test_minheap_empty() {
    let mut heap = MinHeap::<usize>::new();
    assert_eq!(heap.find_smallest_absent(), 0);
  }
}
