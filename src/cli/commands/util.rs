//! Shared reporting helpers for the solve commands.

use seeker::search::SearchMetrics;

pub(crate) fn print_metrics(metrics: &SearchMetrics) {
    println!("nodes expanded: {}", metrics.nodes_expanded);
    println!("path length:    {}", metrics.path_length);
    println!("path cost:      {:.2}", metrics.path_cost);
    println!("elapsed:        {:?}", metrics.elapsed);
}
