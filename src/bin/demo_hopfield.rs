//! Train a network on random bipolar patterns, corrupt one, and watch
//! recall pull it back toward the stored attractor.
//!
//! Usage:
//!   cargo run --release --bin demo_hopfield -- --units 256 --patterns 20 --flips 32

use anyhow::Result;
use clap::Parser;
use memory_lab::utils::{hamming_distance, random_bipolar_patterns};
use memory_lab::{HopfieldNetwork, RecallOptions, UpdateMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "demo_hopfield")]
#[command(about = "Noisy-recall demonstration for the Hopfield network")]
struct Args {
    /// Network size in units
    #[arg(long, default_value = "256")]
    units: usize,

    /// Number of stored patterns
    #[arg(long, default_value = "20")]
    patterns: usize,

    /// Bits to flip in the probe pattern
    #[arg(long, default_value = "32")]
    flips: usize,

    /// Maximum update passes
    #[arg(long, default_value = "50")]
    max_steps: usize,

    /// Use asynchronous updates instead of synchronous
    #[arg(long)]
    asynchronous: bool,

    /// RNG seed
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let patterns = random_bipolar_patterns(args.patterns, args.units, &mut rng);
    let mut network = HopfieldNetwork::new(args.units)?;
    network.train(&patterns)?;
    log::info!(
        "stored {} patterns across {} units",
        args.patterns,
        args.units
    );

    let target = &patterns[0];
    let noisy = network.flip_bits(target, args.flips, &mut rng)?;

    let options = RecallOptions {
        max_steps: args.max_steps,
        mode: if args.asynchronous {
            UpdateMode::Asynchronous
        } else {
            UpdateMode::Synchronous
        },
        capture_trajectory: true,
    };
    let outcome = network.recall(&noisy, &options)?;

    log::info!("noise flips: {}", args.flips);
    log::info!("hamming(noisy, target)    = {}", hamming_distance(&noisy, target));
    log::info!(
        "hamming(recalled, target) = {}",
        hamming_distance(&outcome.state, target)
    );
    log::info!(
        "{} in {} passes (trajectory of {} states)",
        if outcome.converged {
            "converged"
        } else {
            "step budget exhausted"
        },
        outcome.steps,
        outcome.trajectory.len()
    );
    log::info!(
        "recall success: {}",
        hamming_distance(&outcome.state, target) == 0
    );
    Ok(())
}
