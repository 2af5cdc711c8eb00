use std::collections::{vec_deque, VecDeque};

use wasm_bindgen::prelude::*;

use crate::coord::Coord;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// FIFO queue: pops the oldest entry.
    BreadthFirst = 0,
    /// LIFO stack: pops the newest entry.
    DepthFirst = 1,
}

/// Coordinates waiting to be visited.
///
/// Entries always go in at the back; the traversal order only decides which end
/// `pop` takes from. Duplicates are kept, the fill re-checks a cell when it is popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frontier {
    order: TraversalOrder,
    entries: VecDeque<Coord>,
}

impl Frontier {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            entries: VecDeque::new(),
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    pub fn push(&mut self, pos: Coord) {
        self.entries.push_back(pos);
    }

    pub fn pop(&mut self) -> Option<Coord> {
        match self.order {
            TraversalOrder::BreadthFirst => self.entries.pop_front(),
            TraversalOrder::DepthFirst => self.entries.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they will be popped: queue front or stack top first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
            reversed: self.order == TraversalOrder::DepthFirst,
        }
    }

    pub fn to_vec(&self) -> Vec<Coord> {
        self.iter().collect()
    }
}

pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, Coord>,
    reversed: bool,
}

impl Iterator for Iter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.reversed {
            self.inner.next_back().copied()
        } else {
            self.inner.next().copied()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = Coord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(order: TraversalOrder) -> Frontier {
        let mut frontier = Frontier::new(order);
        for col in 0..3 {
            frontier.push(Coord::new(0, col));
        }
        frontier
    }

    #[test]
    fn breadth_first_pops_front() {
        let mut frontier = filled(TraversalOrder::BreadthFirst);
        assert_eq!(frontier.to_vec().first(), Some(&Coord::new(0, 0)));
        assert_eq!(frontier.pop(), Some(Coord::new(0, 0)));
        assert_eq!(frontier.pop(), Some(Coord::new(0, 1)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn depth_first_pops_back() {
        let mut frontier = filled(TraversalOrder::DepthFirst);
        assert_eq!(frontier.to_vec().first(), Some(&Coord::new(0, 2)));
        assert_eq!(frontier.pop(), Some(Coord::new(0, 2)));
        assert_eq!(frontier.pop(), Some(Coord::new(0, 1)));
    }

    #[test]
    fn iter_lists_next_pop_first() {
        let bfs = filled(TraversalOrder::BreadthFirst);
        let dfs = filled(TraversalOrder::DepthFirst);
        let mut reversed = dfs.to_vec();
        reversed.reverse();
        assert_eq!(reversed, bfs.to_vec());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut frontier = Frontier::new(TraversalOrder::BreadthFirst);
        frontier.push(Coord::new(1, 1));
        frontier.push(Coord::new(1, 1));
        assert_eq!(frontier.len(), 2);
        frontier.pop();
        frontier.pop();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
