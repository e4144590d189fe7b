//! The frontier/closed-set protocol shared by all five strategies.

use std::time::Instant;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::search::frontier::Frontier;
use crate::search::node::{Node, NodeArena, NodeId};
use crate::search::traits::{Heuristic, SearchProblem};
use crate::search::{SearchMetrics, Strategy};

/// Result record of a completed search. `success == false` means the
/// frontier was exhausted without reaching a goal; that is a value, not an
/// error, and the caller decides what to do about it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<S, A> {
    pub success: bool,
    /// States from start to goal inclusive; empty when no path was found.
    pub path: Vec<S>,
    /// The actions taken along `path`; always one shorter than `path`, and
    /// empty when the start state is itself a goal.
    pub actions: Vec<A>,
    pub total_cost: f64,
    pub metrics: SearchMetrics,
}

/// Outcome of a single `step()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult<S, A> {
    /// The frontier is not empty and no goal was reached yet.
    Continuing,
    /// A goal state was popped; the report carries the reconstructed path.
    Success(SearchReport<S, A>),
    /// The frontier is exhausted; the report has `success == false`.
    Exhausted(SearchReport<S, A>),
}

/// All mutable state of one search invocation: frontier, closed set, node
/// pool, and counters. The context is created per invocation, threaded
/// explicitly through `step()` calls, and discarded as a whole — callers
/// that stop stepping simply drop it.
pub struct SearchContext<'a, P: SearchProblem, H> {
    strategy: Strategy,
    problem: &'a P,
    heuristic: H,
    frontier: Frontier,
    arena: NodeArena<P::State, P::Action>,
    closed: FxHashSet<P::State>,
    /// Best known g per frontier state, for the update-on-improvement rule.
    /// Only maintained by the cost-based strategies.
    best_g: FxHashMap<P::State, f64>,
    start: P::State,
    metrics: SearchMetrics,
}

impl<'a, P, H> SearchContext<'a, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State>,
{
    /// Seeds the frontier with a node wrapping the start state (g = 0).
    pub fn new(strategy: Strategy, problem: &'a P, heuristic: H) -> Self {
        let start = problem.start_state();
        let h = if strategy.uses_heuristic() {
            heuristic.estimate(&start)
        } else {
            0.0
        };

        let mut arena = NodeArena::new();
        let root = arena.push(Node {
            state: start.clone(),
            action: None,
            parent: None,
            depth: 0,
            g: 0.0,
            h,
        });

        let mut frontier = Frontier::for_strategy(strategy);
        frontier.push(root, strategy.priority(0.0, h));

        let mut best_g = FxHashMap::default();
        if strategy.uses_cost() {
            best_g.insert(start.clone(), 0.0);
        }

        Self {
            strategy,
            problem,
            heuristic,
            frontier,
            arena,
            closed: FxHashSet::default(),
            best_g,
            start,
            metrics: SearchMetrics::default(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Pops and expands at most one node. External callers wanting stepwise
    /// visualization drive this from their own loop or timer; the engine
    /// performs no timing or sleeping of its own.
    pub fn step(&mut self) -> StepResult<P::State, P::Action> {
        let id = match self.frontier.pop() {
            Some(id) => id,
            None => return StepResult::Exhausted(self.failure_report()),
        };

        let (state, g, depth) = {
            let node = self.arena.get(id);
            (node.state.clone(), node.g, node.depth)
        };

        // Stale frontier entry: the state was already expanded via another
        // (no worse) path.
        if self.closed.contains(&state) {
            return StepResult::Continuing;
        }

        if self.problem.is_goal(&state) {
            return StepResult::Success(self.success_report(id));
        }

        self.closed.insert(state.clone());
        self.metrics.nodes_expanded += 1;
        debug!(
            "expanding {:?} (depth {}, g {:.2}, expanded {})",
            state, depth, g, self.metrics.nodes_expanded
        );

        for (action, next, step_cost) in self.problem.successors(&state) {
            debug_assert!(
                step_cost >= 0.0,
                "domain adapter produced a negative step cost"
            );

            if self.closed.contains(&next) {
                continue;
            }

            let g_next = g + step_cost;
            if self.strategy.uses_cost() {
                // Update-on-improvement: keep only strictly cheaper paths to
                // a state already on the frontier. The superseded entry is
                // skipped when popped (its state will be closed by then).
                match self.best_g.get(&next) {
                    Some(&known) if known <= g_next => continue,
                    _ => {}
                }
                self.best_g.insert(next.clone(), g_next);
            }

            let h_next = if self.strategy.uses_heuristic() {
                self.heuristic.estimate(&next)
            } else {
                0.0
            };

            let child = self.arena.push(Node {
                state: next,
                action: Some(action),
                parent: Some(id),
                depth: depth + 1,
                g: g_next,
                h: h_next,
            });
            self.frontier.push(child, self.strategy.priority(g_next, h_next));
        }

        StepResult::Continuing
    }

    /// Runs the search to completion or exhaustion, stamping wall-clock
    /// time into the metrics.
    pub fn run(mut self) -> SearchReport<P::State, P::Action> {
        let started = Instant::now();
        loop {
            match self.step() {
                StepResult::Continuing => continue,
                StepResult::Success(mut report) | StepResult::Exhausted(mut report) => {
                    report.metrics.elapsed = started.elapsed();
                    return report;
                }
            }
        }
    }

    fn success_report(&mut self, terminal: NodeId) -> SearchReport<P::State, P::Action> {
        let total_cost = self.arena.get(terminal).g;
        let (path, actions) = self.arena.reconstruct(terminal, &self.start);

        self.metrics.path_length = path.len();
        self.metrics.path_cost = total_cost;
        debug!(
            "goal reached: {} states, cost {:.2}, {} expanded",
            path.len(),
            total_cost,
            self.metrics.nodes_expanded
        );

        SearchReport {
            success: true,
            path,
            actions,
            total_cost,
            metrics: self.metrics,
        }
    }

    fn failure_report(&self) -> SearchReport<P::State, P::Action> {
        debug!(
            "frontier exhausted after {} expansions",
            self.metrics.nodes_expanded
        );
        SearchReport {
            success: false,
            path: Vec::new(),
            actions: Vec::new(),
            total_cost: 0.0,
            metrics: self.metrics,
        }
    }
}

/// Runs one strategy against one problem and returns the result record.
pub fn run<P, H>(
    strategy: Strategy,
    problem: &P,
    heuristic: H,
) -> SearchReport<P::State, P::Action>
where
    P: SearchProblem,
    H: Heuristic<P::State>,
{
    SearchContext::new(strategy, problem, heuristic).run()
}
