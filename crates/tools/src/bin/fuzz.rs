use std::collections::HashSet;
use std::io;

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use procgen_core::lattice::{connected_components, get_contour, is_border_point};
use procgen_core::{
    CaveGenerator, CaveMap, EMPTY, FILLED, ForestCell, ForestGenerator, GrowthStop, Point,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of consecutive seeds to check
    #[arg(short = 'n', long, default_value_t = 64)]
    seeds: u64,
    #[arg(short, long, default_value_t = 0)]
    start: u64,
}

fn pick(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    min + rng.next_u64() as usize % (max - min + 1)
}

fn check_cave(seed: u64, rng: &mut ChaCha8Rng) -> Result<()> {
    let width = pick(rng, 3, 80);
    let height = pick(rng, 3, 60);
    let build = || {
        CaveGenerator::builder()
            .with_size(width, height)
            .with_random_seed(seed)
            .add_phase(5, 2, 4)
            .add_phase(5, -1, 5)
            .build()
            .with_context(|| format!("Failed to build {width}x{height} cave for seed {seed}"))
    };

    let mut cave = build()?;
    cave.initialize();
    check_border(cave.map(), seed, "initialize")?;
    for phase in cave.phases().to_vec() {
        for _ in 0..phase.rounds {
            cave.step(phase.min, phase.max);
            check_border(cave.map(), seed, "step")?;
        }
    }

    cave.generate();
    let mut again = build()?;
    again.generate();
    ensure!(cave.map() == again.map(), "Invariant failed: cave seed {seed} is not deterministic");

    check_partition(cave.map(), seed)?;
    for pos in get_contour(cave.map()) {
        let (y, x) = (pos.y as usize, pos.x as usize);
        ensure!(
            cave.map().get(y, x) == FILLED && is_border_point(cave.map(), y, x, FILLED),
            "Invariant failed: contour point {pos:?} on seed {seed}"
        );
    }
    Ok(())
}

fn check_border(map: &CaveMap, seed: u64, stage: &str) -> Result<()> {
    let open_edge = map.points().find(|pos| {
        map.is_edge(pos.y as usize, pos.x as usize) && map.at(*pos) != Some(FILLED)
    });
    if let Some(pos) = open_edge {
        bail!("Invariant failed: open border {pos:?} after {stage} on seed {seed}");
    }
    Ok(())
}

fn check_partition(map: &CaveMap, seed: u64) -> Result<()> {
    let mut seen = HashSet::new();
    for room in connected_components(map, EMPTY) {
        for pos in room.iter() {
            ensure!(seen.insert(pos), "Invariant failed: {pos:?} in two rooms on seed {seed}");
        }
    }
    let open: HashSet<Point> = map.points().filter(|&pos| map.at(pos) == Some(EMPTY)).collect();
    ensure!(seen == open, "Invariant failed: rooms do not cover open cells on seed {seed}");
    Ok(())
}

fn check_forest(seed: u64, rng: &mut ChaCha8Rng) -> Result<()> {
    let width = pick(rng, 1, 120);
    let height = pick(rng, 1, 90);
    let mut forest = ForestGenerator::builder()
        .with_size(width, height)
        .with_random_seed(seed)
        .with_max_steps(500)
        .build()
        .with_context(|| format!("Failed to build {width}x{height} forest for seed {seed}"))?;

    let report = forest.generate();
    ensure!(
        forest.forest().count(ForestCell::Seeded) == 0,
        "Invariant failed: SEEDED cells remain on seed {seed}"
    );
    if report.stop == GrowthStop::CoverageReached {
        ensure!(
            report.coverage >= 0.25,
            "Invariant failed: coverage {} on seed {seed}",
            report.coverage
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    println!("Starting fuzz harness on seeds {}..{}", args.start, args.start + args.seeds);
    let mut failures = Vec::new();
    for seed in args.start..args.start + args.seeds {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for outcome in [check_cave(seed, &mut rng), check_forest(seed, &mut rng)] {
            if let Err(err) = outcome {
                eprintln!("{err:#}");
                failures.push(err);
            }
        }
    }

    if !failures.is_empty() {
        bail!("{} invariant violations", failures.len());
    }
    println!("Fuzzing completed successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_border_is_reported() {
        let mut map = CaveMap::filled(4, 4, FILLED);
        assert!(check_border(&map, 1, "initialize").is_ok());
        map.set(0, 2, EMPTY);
        let err = check_border(&map, 1, "step").expect_err("edge cell is open");
        assert!(err.to_string().starts_with("Invariant failed: open border"));
    }

    #[test]
    fn first_seeds_hold_every_invariant() {
        for seed in 0..3 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            check_cave(seed, &mut rng).expect("cave invariants hold");
            check_forest(seed, &mut rng).expect("forest invariants hold");
        }
    }
}
