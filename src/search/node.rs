//! Search nodes and the arena that owns them.

/// Index of a node within the arena of its search invocation.
pub(crate) type NodeId = usize;

/// A generated state plus the bookkeeping needed to reconstruct the path
/// that reached it.
#[derive(Debug, Clone)]
pub(crate) struct Node<S, A> {
    pub state: S,
    /// The action that produced this state, `None` for the root.
    pub action: Option<A>,
    pub parent: Option<NodeId>,
    pub depth: usize,
    /// Cumulative path cost from the start state (g).
    pub g: f64,
    /// Heuristic estimate of remaining cost (h).
    pub h: f64,
}

/// Owns every node created during one search invocation. Parent links are
/// indices into the arena, so they cannot dangle and form a tree by
/// construction; the whole pool is dropped with the invocation.
#[derive(Debug)]
pub(crate) struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S: Clone + PartialEq, A: Clone> NodeArena<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node<S, A>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id]
    }

    /// Walks parent links from `terminal` back to the root, collecting
    /// states and actions in start-to-goal order.
    ///
    /// Panics if the ancestry chain is longer than the arena or does not
    /// end at `start` — either indicates that a domain adapter violated its
    /// successor purity guarantee and corrupted the parent tree.
    pub fn reconstruct(&self, terminal: NodeId, start: &S) -> (Vec<S>, Vec<A>) {
        let mut states = Vec::new();
        let mut actions = Vec::new();
        let mut current = Some(terminal);
        let mut hops = 0;

        while let Some(id) = current {
            hops += 1;
            if hops > self.nodes.len() {
                panic!("parent links form a cycle; domain successor generation is not pure");
            }
            let node = self.get(id);
            states.push(node.state.clone());
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }

        states.reverse();
        actions.reverse();

        if states.first() != Some(start) {
            panic!("reconstructed path does not reach the start state; parent links are corrupt");
        }

        (states, actions)
    }
}
