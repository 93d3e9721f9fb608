//! # memory-lab
//!
//! In-memory probabilistic and associative data structures:
//!
//! - [`BloomFilter`]: approximate set membership over byte strings with
//!   a tunable false-positive rate and no false negatives.
//! - [`HopfieldNetwork`]: bipolar associative memory with one-shot
//!   Hebbian training and energy-descending recall dynamics.
//!
//! The two structures are independent; nothing is shared between them.
//!
//! ## Quick start
//!
//! ```
//! use memory_lab::{BloomFilter, HopfieldNetwork, RecallOptions};
//!
//! # fn main() -> memory_lab::Result<()> {
//! let mut filter = BloomFilter::new(1024, 3)?;
//! filter.add(b"alpha");
//! assert!(filter.contains(b"alpha"));
//!
//! let mut network = HopfieldNetwork::new(4)?;
//! network.train(&[vec![1.0, -1.0, 1.0, -1.0]])?;
//! let outcome = network.recall(&[1.0, -1.0, 1.0, 1.0], &RecallOptions::default())?;
//! assert_eq!(outcome.state.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod bloom;
pub mod error;
pub mod hopfield;
pub mod utils;

pub use bloom::{empirical_false_positive_rate, BloomFilter};
pub use error::{Error, Result};
pub use hopfield::{bipolar, HopfieldNetwork, RecallOptions, RecallOutcome, UpdateMode};
