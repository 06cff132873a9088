use std::cmp::Reverse;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use procgen_core::cave::DEFAULT_CAVE_SEED;
use procgen_core::forest::DEFAULT_FOREST_SEED;
use procgen_core::lattice::{connected_components, contour_lines};
use procgen_core::render::render_rooms;
use procgen_core::{
    CaveConfig, CavePhase, EMPTY, ForestConfig, GeneratedCave, Line, generate_cave,
    generate_forest, generate_level,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config_file;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with optional [cave] and [forest] tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a cellular-automaton cave
    Cave(CaveArgs),
    /// Grow a forest
    Forest(ForestArgs),
    /// Generate a classic cave and a woodland forest from one seed
    Level {
        #[arg(short, long, default_value_t = DEFAULT_CAVE_SEED)]
        seed: u64,
    },
}

#[derive(Args)]
struct CaveArgs {
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Automaton phase as MIN,MAX,ROUNDS; repeat to add phases
    #[arg(long = "phase", value_parser = parse_phase)]
    phases: Vec<CavePhase>,
    #[arg(long)]
    fill_probability: Option<f64>,
    /// Also emit the merged contour edge lines
    #[arg(long)]
    contour: bool,
    /// Label rooms by size rank instead of plain floor
    #[arg(long)]
    rooms: bool,
}

#[derive(Args)]
struct ForestArgs {
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    initial_trees: Option<u32>,
    #[arg(long)]
    seed_radius: Option<u32>,
    #[arg(long)]
    seed_decay: Option<f64>,
    #[arg(long)]
    seed_strength: Option<f64>,
    #[arg(long)]
    coverage: Option<f64>,
    #[arg(long)]
    max_steps: Option<u32>,
}

#[derive(Serialize)]
struct Snapshot<'a, T> {
    snapshot_hash: u64,
    #[serde(flatten)]
    generated: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    contour_lines: Option<Vec<Line>>,
}

fn parse_phase(value: &str) -> Result<CavePhase> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [min, max, rounds] = parts.as_slice() else {
        bail!("expected MIN,MAX,ROUNDS, got {value:?}");
    };
    Ok(CavePhase::new(
        min.parse().with_context(|| format!("invalid phase min {min:?}"))?,
        max.parse().with_context(|| format!("invalid phase max {max:?}"))?,
        rounds.parse().with_context(|| format!("invalid phase rounds {rounds:?}"))?,
    ))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn cave_config(args: &CaveArgs, base: Option<CaveConfig>) -> CaveConfig {
    let mut config = base.unwrap_or_else(|| CaveConfig::classic(DEFAULT_CAVE_SEED));
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if !args.phases.is_empty() {
        config.phases = args.phases.clone();
    }
    if let Some(fill_probability) = args.fill_probability {
        config.fill_probability = fill_probability;
    }
    config
}

fn forest_config(args: &ForestArgs, base: Option<ForestConfig>) -> ForestConfig {
    let mut config = base.unwrap_or_else(|| ForestConfig::woodland(DEFAULT_FOREST_SEED));
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(initial_trees) = args.initial_trees {
        config.initial_trees = initial_trees;
    }
    if let Some(seed_radius) = args.seed_radius {
        config.seed_radius = seed_radius;
    }
    if let Some(seed_decay) = args.seed_decay {
        config.seed_decay = seed_decay;
    }
    if let Some(seed_strength) = args.seed_strength {
        config.seed_strength = seed_strength;
    }
    if let Some(coverage) = args.coverage {
        config.desired_coverage = coverage;
    }
    if args.max_steps.is_some() {
        config.max_steps = args.max_steps;
    }
    config
}

fn print_cave(cave: &GeneratedCave, args: &CaveArgs, format: Format) -> Result<()> {
    let lines = args.contour.then(|| contour_lines(&cave.map));
    match format {
        Format::Json => {
            let snapshot = Snapshot {
                snapshot_hash: cave.snapshot_hash(),
                generated: cave,
                contour_lines: lines,
            };
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Format::Text => {
            if args.rooms {
                let mut rooms = connected_components(&cave.map, EMPTY);
                rooms.sort_by_key(|room| Reverse(room.len()));
                print!("{}", render_rooms(&cave.map, &rooms));
            } else {
                print!("{cave}");
            }
            println!("rooms: {:?}", cave.room_sizes);
            println!("Snapshot Hash: {:016x}", cave.snapshot_hash());
            for line in lines.iter().flatten() {
                println!("{},{} -> {},{}", line.start.x, line.start.y, line.end.x, line.end.y);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = match &cli.config {
        Some(path) => config_file::load(path)?,
        None => config_file::FileConfig::default(),
    };

    match cli.command {
        Command::Cave(args) => {
            let config = cave_config(&args, file.cave);
            let cave = generate_cave(&config).context("Cave generation failed")?;
            info!(rooms = cave.room_sizes.len(), "cave ready");
            print_cave(&cave, &args, cli.format)?;
        }
        Command::Forest(args) => {
            let config = forest_config(&args, file.forest);
            let forest = generate_forest(&config).context("Forest generation failed")?;
            info!(steps = forest.growth.steps, coverage = forest.growth.coverage, "forest ready");
            match cli.format {
                Format::Json => {
                    let snapshot = Snapshot {
                        snapshot_hash: forest.snapshot_hash(),
                        generated: &forest,
                        contour_lines: None,
                    };
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
                Format::Text => {
                    print!("{forest}");
                    println!(
                        "steps: {}, coverage: {:.3}, stop: {:?}",
                        forest.growth.steps, forest.growth.coverage, forest.growth.stop
                    );
                    println!("Snapshot Hash: {:016x}", forest.snapshot_hash());
                }
            }
        }
        Command::Level { seed } => {
            let level = generate_level(seed).context("Level generation failed")?;
            match cli.format {
                Format::Json => {
                    let snapshot = Snapshot {
                        snapshot_hash: level.snapshot_hash(),
                        generated: &level,
                        contour_lines: None,
                    };
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
                Format::Text => {
                    print!("{}", level.cave);
                    println!();
                    print!("{}", level.forest);
                    println!("Snapshot Hash: {:016x}", level.snapshot_hash());
                }
            }
        }
    }

    Ok(())
}
