//! Wayfind CLI - grid navigation and path-following demo.
//!
//! - `wayfind plan` - print the waypoint route between two world positions
//! - `wayfind simulate` - run the agent controller headless until it arrives

mod map;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use map::MapConfig;
use wayfind::agent::{AgentController, SteeringConfig};
use wayfind::nav::{PathPlanner, Vec2};

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(about = "Grid navigation and path-following demo", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the waypoint route between two world positions
    Plan {
        /// Map description file (YAML); defaults to an empty 16x16 map
        #[arg(long)]
        map: Option<PathBuf>,

        /// Start position as X,Y
        #[arg(long, value_parser = parse_point)]
        from: (f32, f32),

        /// Target position as X,Y
        #[arg(long, value_parser = parse_point)]
        to: (f32, f32),
    },

    /// Run the agent controller headless until it arrives
    Simulate {
        /// Map description file (YAML); defaults to an empty 16x16 map
        #[arg(long)]
        map: Option<PathBuf>,

        /// Spawn position as X,Y
        #[arg(long, value_parser = parse_point)]
        from: (f32, f32),

        /// Target position as X,Y
        #[arg(long, value_parser = parse_point)]
        to: (f32, f32),

        /// Fixed tick delta in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Tick budget before giving up
        #[arg(long, default_value_t = 10_000)]
        max_ticks: u32,

        /// Teleport to the target instead of path-following
        #[arg(long)]
        teleport: bool,
    },
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let x = x
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad X in `{s}`: {e}"))?;
    let y = y
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad Y in `{s}`: {e}"))?;
    Ok((x, y))
}

fn load_map(path: Option<&PathBuf>) -> Result<MapConfig> {
    match path {
        Some(path) => MapConfig::load(path),
        None => Ok(MapConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan { map, from, to } => plan(map.as_ref(), from, to),
        Commands::Simulate {
            map,
            from,
            to,
            dt,
            max_ticks,
            teleport,
        } => simulate(map.as_ref(), from, to, dt, max_ticks, teleport),
    }
}

fn plan(map: Option<&PathBuf>, from: (f32, f32), to: (f32, f32)) -> Result<()> {
    let config = load_map(map)?;
    let mut planner = PathPlanner::new(config.to_grid());

    let route = planner.get_path(Vec2::new(from.0, from.1), Vec2::new(to.0, to.1));
    if route.is_empty() {
        warn!("no path from {from:?} to {to:?}");
        return Ok(());
    }

    info!("route with {} waypoints", route.len());
    for (i, p) in route.iter().enumerate() {
        println!("{i:>3}: {:.1}, {:.1}", p.x, p.y);
    }
    Ok(())
}

fn simulate(
    map: Option<&PathBuf>,
    from: (f32, f32),
    to: (f32, f32),
    dt: f32,
    max_ticks: u32,
    teleport: bool,
) -> Result<()> {
    let config = load_map(map)?;
    let planner = PathPlanner::new(config.to_grid());
    let mut agent = AgentController::new(
        planner,
        SteeringConfig::default(),
        Vec2::new(from.0, from.1),
    );

    let target = Vec2::new(to.0, to.1);
    agent.on_follow_request(target, teleport);

    if teleport {
        let p = agent.position();
        info!("teleported to {:.1}, {:.1}", p.x, p.y);
        return Ok(());
    }
    if !agent.state().is_following() {
        warn!("no path from {from:?} to {to:?}");
        return Ok(());
    }

    let mut ticks = 0u32;
    while agent.state().is_following() && ticks < max_ticks {
        agent.tick(dt);
        ticks += 1;
        if ticks % 60 == 0 {
            let p = agent.position();
            debug!("tick {ticks}: {:.1}, {:.1}", p.x, p.y);
        }
    }

    let p = agent.position();
    if agent.state().is_following() {
        warn!(
            "tick budget exhausted after {ticks} ticks at {:.1}, {:.1}",
            p.x, p.y
        );
    } else {
        info!(
            "arrived after {ticks} ticks at {:.1}, {:.1} (distance to target {:.2})",
            p.x,
            p.y,
            p.distance(target)
        );
    }
    Ok(())
}
