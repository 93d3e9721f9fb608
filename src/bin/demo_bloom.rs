//! Sweep filter sizings and compare theoretical vs empirical
//! false-positive rates.
//!
//! Usage:
//!   cargo run --release --bin demo_bloom -- --absent 10000

use anyhow::Result;
use clap::Parser;
use memory_lab::utils::random_items;
use memory_lab::{empirical_false_positive_rate, BloomFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "demo_bloom")]
#[command(about = "Compare theoretical and empirical Bloom filter false-positive rates")]
struct Args {
    /// Number of absent probes per run
    #[arg(long, default_value = "10000")]
    absent: usize,

    /// Length of each random item in bytes
    #[arg(long, default_value = "16")]
    item_len: usize,
}

fn run_suite(items: usize, target_fp: f64, args: &Args) -> Result<()> {
    let bits = BloomFilter::optimal_bits(items, target_fp)?;
    let hashes = BloomFilter::optimal_hashes(bits, items)?;
    let mut filter = BloomFilter::new(bits, hashes)?;

    // Disjoint seeds keep the present and absent sets independent.
    let present = random_items(items, args.item_len, &mut StdRng::seed_from_u64(1));
    let absent = random_items(args.absent, args.item_len, &mut StdRng::seed_from_u64(2));

    let empirical = empirical_false_positive_rate(&mut filter, &present, &absent);
    let theory = filter.estimate_fp_rate(Some(items));

    log::info!(
        "n={} target_p={:.4} -> m={} bits, k={} (~{:.1} bits/item)",
        items,
        target_fp,
        bits,
        hashes,
        bits as f64 / items as f64
    );
    log::info!("theory_p={:.4} empirical_p={:.4}", theory, empirical);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    for items in [1_000, 5_000, 20_000] {
        for target_fp in [0.10, 0.03, 0.01] {
            run_suite(items, target_fp, &args)?;
        }
    }
    Ok(())
}
