use clap::Parser;
use delivery_planner::grid::{Grid, GridWorld, Position};
use delivery_planner::search::{path_cost, Algorithm, DEFAULT_PLANNING_HORIZON};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare bfs, ucs and astar on seeded random grids", long_about = None)]
struct Args {
    /// Number of random grids to evaluate
    #[clap(long, default_value_t = 20)]
    grids: u64,

    /// Seed of the first grid; grid `i` uses `seed + i`
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Grid size (rows and columns), at least 1
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    size: u16,

    /// Probability that a cell is a wall
    #[clap(long, default_value_t = 0.2)]
    wall_ratio: f64,

    /// Highest cell cost, at least 1
    #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    max_cost: i32,

    /// Planning horizon in timesteps
    #[clap(long, default_value_t = DEFAULT_PLANNING_HORIZON)]
    horizon: u32,
}

#[derive(Default)]
struct Totals {
    solved: usize,
    nodes: usize,
    time: f64,
    cost: u64,
    moves: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("compare_algorithms=info")),
        )
        .init();

    let args = Args::parse();
    let start = Position::new(0, 0);
    let size = usize::from(args.size);
    let last = i32::from(args.size) - 1;
    let goal = Position::new(last, last);

    let mut totals: HashMap<Algorithm, Totals> = HashMap::new();
    info!("Starting comparison over {} grids of size {}...", args.grids, args.size);

    for grid_idx in 0..args.grids {
        let current_seed = args.seed + grid_idx;
        let grid = Grid::random_with_seed(size, size, args.wall_ratio, args.max_cost, current_seed);
        let world = GridWorld::new(grid, Vec::new());

        println!("\nGrid {} (Seed: {})", grid_idx, current_seed);

        for algo in Algorithm::ALL {
            let planner = algo.planner(args.horizon);
            let (path, stats) = planner.plan(&world, start, goal, 0);
            let entry = totals.entry(algo).or_default();
            entry.nodes += stats.nodes_expanded;
            entry.time += stats.time_taken;

            if path.is_empty() {
                println!("  Algo: {:<6} no path (nodes: {})", algo, stats.nodes_expanded);
                continue;
            }
            let cost = path_cost(&world, &path);
            entry.solved += 1;
            entry.cost += cost;
            entry.moves += path.len() - 1;
            debug!(%algo, cost, moves = path.len() - 1, "path found");
            println!(
                "  Algo: {:<6} Cost: {:<5} Moves: {:<5} Nodes: {:<8} Time: {:.6}s",
                algo,
                cost,
                path.len() - 1,
                stats.nodes_expanded,
                stats.time_taken
            );
        }
    }

    println!("\n--- Comparison Complete ---");
    println!("Number of grids evaluated: {}", args.grids);
    println!("\n--- Averages ---");
    for algo in Algorithm::ALL {
        let Some(t) = totals.get(&algo) else {
            continue;
        };
        let runs = args.grids.max(1) as f64;
        let solved = t.solved.max(1) as f64;
        println!(
            "Algo {:<6}: solved {}/{}, avg nodes = {:.1}, avg time = {:.6}s, avg cost (solved) = {:.2}, avg moves (solved) = {:.2}",
            algo,
            t.solved,
            args.grids,
            t.nodes as f64 / runs,
            t.time / runs,
            t.cost as f64 / solved,
            t.moves as f64 / solved
        );
    }
}
