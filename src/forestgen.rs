//! Random lineage forest generator.
//!
//! Writes a snapshot JSON file for the viewer. Cells continue, divide, or
//! die at each time step; division probabilities are tuned so a handful of
//! starting tracks produces a readable forest.
//!
//! Usage: forestgen [output.json] [timestamps] [tracks] [seed]

use anyhow::{Context, Result};
use linview::Forest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs;

const DIVIDE_PROBABILITY: f64 = 0.15;
const DEATH_PROBABILITY: f64 = 0.04;

const PALETTE: &[&str] = &[
    "#2e86c1", "#28b463", "#f39c12", "#e74c3c", "#9b59b6", "#1abc9c", "#d35400", "#5dade2",
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let output = args.get(1).map(String::as_str).unwrap_or("lineage.json");
    let timestamps: i64 = parse_arg(&args, 2, 12)?;
    let tracks: i64 = parse_arg(&args, 3, 4)?;
    let seed: u64 = parse_arg(&args, 4, 42)?;

    let forest = generate_forest(timestamps, tracks, seed)?;
    let (width, height) = forest.dimensions();

    let json = serde_json::to_string_pretty(&forest.to_snapshot_value())?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output))?;

    println!(
        "Wrote {}: {} nodes, {}x{} (seed {})",
        output,
        forest.len(),
        width,
        height,
        seed
    );
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("bad argument '{}'", raw)),
        None => Ok(default),
    }
}

/// Simulates a population of cells over the given number of timestamps.
fn generate_forest(timestamps: i64, tracks: i64, seed: u64) -> Result<Forest> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut forest = Forest::new();
    let mut next_label: i64 = 1;

    // Live cells as (id, label) pairs; labels follow a track through time
    // and pick its color.
    let mut live: Vec<(String, i64)> = Vec::new();
    for _ in 0..tracks {
        let label = next_label;
        next_label += 1;
        let id = node_id(0, label);
        forest.add_node(&id, 0, Some(label))?;
        forest.set_color(&id, track_color(label))?;
        live.push((id, label));
    }

    for t in 1..timestamps {
        let mut survivors = Vec::new();
        for (parent_id, label) in live {
            let roll: f64 = rng.gen();
            if roll < DEATH_PROBABILITY {
                continue;
            }
            if roll < DEATH_PROBABILITY + DIVIDE_PROBABILITY {
                // Division: two daughters with fresh labels.
                for _ in 0..2 {
                    let daughter_label = next_label;
                    next_label += 1;
                    let id = node_id(t, daughter_label);
                    forest.add_node(&id, t, Some(daughter_label))?;
                    forest.set_color(&id, track_color(daughter_label))?;
                    forest.set_parent(&id, &parent_id)?;
                    survivors.push((id, daughter_label));
                }
            } else {
                // Continuation: same label, same track.
                let id = node_id(t, label);
                forest.add_node(&id, t, Some(label))?;
                forest.set_color(&id, track_color(label))?;
                forest.set_parent(&id, &parent_id)?;
                survivors.push((id, label));
            }
        }
        live = survivors;

        // Occasionally a new cell wanders into view.
        if rng.gen::<f64>() < 0.05 {
            let label = next_label;
            next_label += 1;
            let id = node_id(t, label);
            forest.add_node(&id, t, Some(label))?;
            forest.set_color(&id, track_color(label))?;
            live.push((id, label));
        }
    }

    forest.assign_offsets();
    Ok(forest)
}

/// Ids follow the "<ordinal>_<label>" convention of the segmentation export.
fn node_id(ordinal: i64, label: i64) -> String {
    format!("{}_{}", ordinal, label)
}

fn track_color(label: i64) -> &'static str {
    PALETTE[(label as usize) % PALETTE.len()]
}
