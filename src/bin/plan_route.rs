use clap::Parser;
use delivery_planner::agent::{DeliveryAgent, ExecutionLog};
use delivery_planner::config::AgentConfig;
use delivery_planner::error::Result;
use delivery_planner::grid::{GridWorld, Position};
use delivery_planner::utils::{load_grid, load_schedule};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const UNPREDICTABLE: &str = "unpredictable";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the map file (whitespace-separated costs, -1 or '#' for walls)
    #[clap(long)]
    map: PathBuf,

    /// Planning algorithm: bfs, ucs or astar (overrides the config file)
    #[clap(long)]
    algo: Option<String>,

    /// Start position as `ROW COL`
    #[clap(long, required = true, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    start: Vec<i32>,

    /// Goal position as `ROW COL`
    #[clap(long, required = true, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    goal: Vec<i32>,

    /// Obstacle schedule JSON file, or `unpredictable` to check for surprises while moving
    #[clap(long)]
    dynamic: Option<String>,

    /// Optional TOML config file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Planning horizon in timesteps (overrides the config file)
    #[clap(long)]
    horizon: Option<u32>,

    /// Execution step budget (overrides the config file)
    #[clap(long)]
    max_steps: Option<usize>,

    /// Seed for the local replanner (overrides the config file)
    #[clap(long)]
    seed: Option<u64>,

    /// Print the ASCII map with the final agent position
    #[clap(long)]
    render: bool,

    /// Print the full execution log as JSON
    #[clap(long)]
    json: bool,
}

fn position(coords: &[i32]) -> Position {
    Position::new(coords[0], coords[1])
}

fn build_config(args: &Args) -> Result<AgentConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            AgentConfig::load(path)?
        }
        None => AgentConfig::default(),
    };
    if let Some(algo) = &args.algo {
        config.algorithm = algo.parse()?;
    }
    if let Some(horizon) = args.horizon {
        config.planning_horizon = horizon;
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = max_steps;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn print_summary(log: &ExecutionLog) {
    println!("Success: {}", log.success);
    println!("Total nodes expanded (sum across plans): {}", log.total_nodes_expanded);
    println!("Total planning time (s): {:.6}", log.total_plan_time);
    println!("Number of plans made: {}", log.plans.len());
    println!("Final path length (steps): {}", log.final_path.len());
    println!();

    if let Some(first) = log.plans.first() {
        println!("First plan: {}", format_path(&first.path));
    }
    println!("Final path: {}", format_path(&log.final_path));
}

fn format_path(path: &[Position]) -> String {
    let cells: Vec<String> = path.iter().map(Position::to_string).collect();
    format!("[{}]", cells.join(", "))
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    let start = position(&args.start);
    let goal = position(&args.goal);

    let mut world = GridWorld::new(load_grid(&args.map)?, Vec::new());
    let unpredictable = args.dynamic.as_deref() == Some(UNPREDICTABLE);
    if let Some(schedule) = args.dynamic.as_deref().filter(|d| *d != UNPREDICTABLE) {
        for obstacle in load_schedule(schedule)? {
            world.add_dynamic_obstacle(obstacle);
        }
    }

    info!(
        "Map loaded ({}x{}). Start: {} Goal: {} Algo: {} Dynamic: {:?}",
        world.rows(),
        world.cols(),
        start,
        goal,
        config.algorithm,
        args.dynamic
    );

    let mut agent = DeliveryAgent::new(world, &config);
    let log = agent.follow_and_replan(start, goal, unpredictable, config.max_steps)?;

    print_summary(&log);

    if args.render {
        let agent_pos = log.final_path.last().copied().unwrap_or(start);
        let t = log.final_path.len() as u32;
        println!("\n{}", agent.world().render(Some(agent_pos), Some(goal), Some(t)));
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("delivery_planner=info,plan_route=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
