//! Frontier orderings shared by all five strategies.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::search::node::NodeId;
use crate::search::Strategy;

/// An entry in the priority frontier. The sequence number implements the
/// stable tie-break: of two entries with equal priority, the one inserted
/// earlier pops first, keeping every search deterministic.
#[derive(Debug, Clone, Copy)]
struct PrioritizedEntry {
    priority: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for PrioritizedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for PrioritizedEntry {}

impl Ord for PrioritizedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the minimum priority pops
        // first. Priorities are finite nonnegative reals per the domain
        // contract, so partial_cmp only fails on a broken adapter.
        match other.priority.partial_cmp(&self.priority) {
            Some(Ordering::Equal) | None => other.seq.cmp(&self.seq),
            Some(ordering) => ordering,
        }
    }
}

impl PartialOrd for PrioritizedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
enum Queue {
    /// Insertion order; breadth-first.
    Fifo(VecDeque<NodeId>),
    /// Most-recently pushed first; depth-first.
    Lifo(Vec<NodeId>),
    /// Minimum priority first; uniform-cost, greedy, and A*.
    Priority(BinaryHeap<PrioritizedEntry>),
}

/// The ordered multiset of generated-but-unexpanded nodes.
#[derive(Debug)]
pub(crate) struct Frontier {
    queue: Queue,
    next_seq: u64,
}

impl Frontier {
    pub fn for_strategy(strategy: Strategy) -> Self {
        let queue = match strategy {
            Strategy::BreadthFirst => Queue::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Queue::Lifo(Vec::new()),
            Strategy::UniformCost | Strategy::GreedyBestFirst | Strategy::AStar => {
                Queue::Priority(BinaryHeap::new())
            }
        };
        Self { queue, next_seq: 0 }
    }

    /// Inserts a node. `priority` is ignored by the FIFO and LIFO orderings.
    pub fn push(&mut self, node: NodeId, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(node),
            Queue::Lifo(stack) => stack.push(node),
            Queue::Priority(heap) => heap.push(PrioritizedEntry {
                priority,
                seq,
                node,
            }),
        }
    }

    /// Removes and returns the next node under this frontier's ordering.
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front(),
            Queue::Lifo(stack) => stack.pop(),
            Queue::Priority(heap) => heap.pop().map(|entry| entry.node),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.queue {
            Queue::Fifo(queue) => queue.is_empty(),
            Queue::Lifo(stack) => stack.is_empty(),
            Queue::Priority(heap) => heap.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_frontier_pops_minimum_first() {
        let mut frontier = Frontier::for_strategy(Strategy::UniformCost);
        frontier.push(0, 3.0);
        frontier.push(1, 1.0);
        frontier.push(2, 2.0);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(0));
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut frontier = Frontier::for_strategy(Strategy::AStar);
        frontier.push(7, 5.0);
        frontier.push(8, 5.0);
        frontier.push(9, 5.0);
        assert_eq!(frontier.pop(), Some(7));
        assert_eq!(frontier.pop(), Some(8));
        assert_eq!(frontier.pop(), Some(9));
    }

    #[test]
    fn fifo_and_lifo_orderings() {
        let mut fifo = Frontier::for_strategy(Strategy::BreadthFirst);
        fifo.push(0, 0.0);
        fifo.push(1, 0.0);
        assert_eq!(fifo.pop(), Some(0));

        let mut lifo = Frontier::for_strategy(Strategy::DepthFirst);
        lifo.push(0, 0.0);
        lifo.push(1, 0.0);
        assert_eq!(lifo.pop(), Some(1));
    }
}
