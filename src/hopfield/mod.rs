//! Classical Hopfield network over bipolar {-1, +1} states.
//!
//! Training is one-shot Hebbian: the weight matrix is the average of the
//! stored patterns' outer products with the diagonal zeroed. Recall runs
//! synchronous or asynchronous threshold dynamics from a starting state
//! until a fixed point or a step budget is hit; the energy
//! `-0.5 * s^T W s` never increases along the way.

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::error::{Error, Result};

/// Validate a pattern and return its bipolar form.
///
/// Values forming a subset of {0, 1} are mapped 0 -> -1, 1 -> +1; values
/// already a subset of {-1, +1} pass through unchanged. Anything else is
/// rejected.
pub fn bipolar(pattern: &[f64]) -> Result<Vec<f64>> {
    if pattern.iter().all(|&v| v == 0.0 || v == 1.0) {
        return Ok(pattern
            .iter()
            .map(|&v| if v == 0.0 { -1.0 } else { 1.0 })
            .collect());
    }
    if pattern.iter().all(|&v| v == -1.0 || v == 1.0) {
        return Ok(pattern.to_vec());
    }
    Err(Error::InvalidPattern(
        "values must be binary {0,1} or bipolar {-1,1}".into(),
    ))
}

/// Update discipline for one recall pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every unit thresholds against the same snapshot of the state.
    Synchronous,
    /// Units update in index order 0..n, each seeing the updates made
    /// earlier in the same pass.
    Asynchronous,
}

/// Options for a recall run.
#[derive(Debug, Clone)]
pub struct RecallOptions {
    /// Maximum number of full update passes.
    pub max_steps: usize,
    /// Update discipline.
    pub mode: UpdateMode,
    /// Record every visited state in the outcome.
    pub capture_trajectory: bool,
}

impl Default for RecallOptions {
    fn default() -> Self {
        Self {
            max_steps: 50,
            mode: UpdateMode::Synchronous,
            capture_trajectory: false,
        }
    }
}

/// Result of a recall run.
#[derive(Debug, Clone)]
pub struct RecallOutcome {
    /// Final bipolar state.
    pub state: Vec<f64>,
    /// Update passes taken.
    pub steps: usize,
    /// Whether a fixed point was reached within the step budget.
    pub converged: bool,
    /// States from the initial through the final one (steps + 1 entries)
    /// when capture was requested, empty otherwise.
    pub trajectory: Vec<Vec<f64>>,
}

/// Bipolar associative memory trained with a one-shot Hebbian rule.
#[derive(Debug, Clone)]
pub struct HopfieldNetwork {
    units: usize,
    weights: Array2<f64>,
}

impl HopfieldNetwork {
    /// Create an untrained network of `units` units with zero weights.
    pub fn new(units: usize) -> Result<Self> {
        if units == 0 {
            return Err(Error::InvalidParameter(
                "unit count must be positive".into(),
            ));
        }
        Ok(Self {
            units,
            weights: Array2::zeros((units, units)),
        })
    }

    /// Number of units (n).
    pub fn units(&self) -> usize {
        self.units
    }

    /// Read-only view of the weight matrix. Symmetric with a zero
    /// diagonal after `train`.
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    fn validate(&self, pattern: &[f64]) -> Result<Array1<f64>> {
        if pattern.len() != self.units {
            return Err(Error::InvalidPattern(format!(
                "pattern length {} does not match network size {}",
                pattern.len(),
                self.units
            )));
        }
        Ok(Array1::from(bipolar(pattern)?))
    }

    /// Hebbian learning: `W = (1/P) sum(p p^T)` with the diagonal zeroed.
    ///
    /// The weight matrix is replaced wholesale; a failed call leaves the
    /// previous weights untouched.
    pub fn train(&mut self, patterns: &[Vec<f64>]) -> Result<()> {
        if patterns.is_empty() {
            return Err(Error::InvalidPattern("training set is empty".into()));
        }
        let mut weights: Array2<f64> = Array2::zeros((self.units, self.units));
        for pattern in patterns {
            let p = self.validate(pattern)?;
            for i in 0..self.units {
                for j in 0..self.units {
                    weights[[i, j]] += p[i] * p[j];
                }
            }
        }
        weights /= patterns.len() as f64;
        for i in 0..self.units {
            weights[[i, i]] = 0.0;
        }
        self.weights = weights;
        log::debug!(
            "trained on {} patterns across {} units",
            patterns.len(),
            self.units
        );
        Ok(())
    }

    /// Network energy `-0.5 * s^T W s`, a Lyapunov function of the
    /// recall dynamics.
    pub fn energy(&self, state: &[f64]) -> Result<f64> {
        let s = self.validate(state)?;
        Ok(-0.5 * s.dot(&self.weights.dot(&s)))
    }

    /// Run the update dynamics from `initial` until a fixed point or the
    /// step budget, whichever comes first. Activation exactly 0 resolves
    /// to +1.
    pub fn recall(&self, initial: &[f64], options: &RecallOptions) -> Result<RecallOutcome> {
        let mut state = self.validate(initial)?;
        let mut trajectory = Vec::new();
        if options.capture_trajectory {
            trajectory.push(state.to_vec());
        }

        let mut steps = 0;
        let mut converged = false;
        for _ in 0..options.max_steps {
            let previous = state.clone();
            match options.mode {
                UpdateMode::Synchronous => {
                    let net = self.weights.dot(&state);
                    state = net.mapv(|a| if a >= 0.0 { 1.0 } else { -1.0 });
                }
                UpdateMode::Asynchronous => {
                    for i in 0..self.units {
                        let activation = self.weights.row(i).dot(&state);
                        state[i] = if activation >= 0.0 { 1.0 } else { -1.0 };
                    }
                }
            }
            steps += 1;
            if options.capture_trajectory {
                trajectory.push(state.to_vec());
            }
            if state == previous {
                converged = true;
                break;
            }
        }
        log::debug!("recall ran {} passes, converged: {}", steps, converged);

        Ok(RecallOutcome {
            state: state.to_vec(),
            steps,
            converged,
            trajectory,
        })
    }

    /// Return a copy of `pattern` with `flips` distinct positions
    /// sign-inverted, chosen without replacement from `rng`.
    pub fn flip_bits(
        &self,
        pattern: &[f64],
        flips: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<f64>> {
        let mut flipped = self.validate(pattern)?.to_vec();
        if flips > self.units {
            return Err(Error::InvalidParameter(format!(
                "flip count {} exceeds unit count {}",
                flips, self.units
            )));
        }
        for idx in rand::seq::index::sample(rng, self.units, flips) {
            flipped[idx] = -flipped[idx];
        }
        Ok(flipped)
    }
}
