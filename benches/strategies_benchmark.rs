use criterion::{criterion_group, criterion_main, Criterion};

use seeker::domains::grid::{Cell, Connectivity, GridMap};
use seeker::search::{run, NullHeuristic, Strategy};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("a-star manhattan 20x20", |b| {
        b.iter(|| solve_walled_grid(Strategy::AStar))
    });
    c.bench_function("uniform cost 20x20", |b| {
        b.iter(|| solve_walled_grid(Strategy::UniformCost))
    });
    c.bench_function("breadth first 20x20", |b| {
        b.iter(|| solve_walled_grid(Strategy::BreadthFirst))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// 20x20 grid with two staggered walls, forcing a serpentine path.
fn solve_walled_grid(strategy: Strategy) {
    let mut map = GridMap::new(20, 20, Connectivity::Four).unwrap();
    for col in 0..15 {
        map.block(Cell::new(5, col)).unwrap();
    }
    for col in 5..20 {
        map.block(Cell::new(12, col)).unwrap();
    }

    let problem = map.problem(Cell::new(0, 0), Cell::new(19, 19)).unwrap();
    let report = match strategy {
        Strategy::GreedyBestFirst | Strategy::AStar => {
            run(strategy, &problem, problem.manhattan())
        }
        _ => run(strategy, &problem, NullHeuristic),
    };
    assert!(report.success);
}
