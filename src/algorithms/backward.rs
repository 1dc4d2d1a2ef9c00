//! Backward algorithm as a right-to-left trellis recurrence.
//!
//! `beta[i, t]` is the probability of `O[t+1..T]` given state `i` at time `t`:
//! - `beta[i, T-1] = 1`
//! - `beta[i, t] = Σ_j A[i, j] * B[j, O[t+1]] * beta[j, t+1]`
//! - `P(O) = Σ_s pi[s] * B[s, O[0]] * beta[s, 0]`
//!
//! The likelihood agrees with the forward pass up to rounding.

use crate::engine::TrellisEngine;
use crate::error::Result;
use crate::model::Hmm;
use crate::traits::{Sweep, TrellisRecurrence};
use crate::trellis::Trellis;

#[derive(Clone, Copy, Debug)]
pub struct BackwardRecurrence<'a> {
    hmm: &'a Hmm,
    obs: &'a [usize],
}

impl<'a> BackwardRecurrence<'a> {
    pub fn new(hmm: &'a Hmm, obs: &'a [usize]) -> Result<Self> {
        hmm.check_observations(obs)?;
        Ok(Self { hmm, obs })
    }
}

impl TrellisRecurrence for BackwardRecurrence<'_> {
    type Cell = f64;

    fn num_states(&self) -> usize {
        self.hmm.n_states()
    }

    fn num_steps(&self) -> usize {
        self.obs.len()
    }

    fn sweep(&self) -> Sweep {
        Sweep::RightToLeft
    }

    fn boundary_cell(&self, _state: usize) -> f64 {
        1.0
    }

    fn induce_cell(&self, t: usize, state: usize, adjacent: &[f64]) -> f64 {
        let next_sym = self.obs[t + 1];
        adjacent
            .iter()
            .enumerate()
            .map(|(to, &beta)| {
                self.hmm.transition(state, to) * self.hmm.emission(to, next_sym) * beta
            })
            .sum()
    }
}

/// Output of [`backward`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackwardResult {
    /// `P(O | model)` recovered from the first beta column.
    pub probability: f64,
    /// N×T backward trellis.
    pub beta: Trellis<f64>,
}

/// Backward trellis for `obs` under `hmm`.
///
/// # Errors
/// Same shape errors as [`forward`](crate::forward).
pub fn backward(hmm: &Hmm, obs: &[usize]) -> Result<BackwardResult> {
    backward_with(&TrellisEngine::new(), hmm, obs)
}

/// [`backward`] driven by an explicitly configured engine.
pub fn backward_with(engine: &TrellisEngine, hmm: &Hmm, obs: &[usize]) -> Result<BackwardResult> {
    let recurrence = BackwardRecurrence::new(hmm, obs)?;
    let beta = engine.run(&recurrence);
    let probability: f64 = (0..hmm.n_states())
        .map(|s| hmm.initial(s) * hmm.emission(s, obs[0]) * beta[(s, 0)])
        .sum();

    #[cfg(feature = "tracing")]
    tracing::debug!(states = hmm.n_states(), steps = obs.len(), probability, "backward complete");

    Ok(BackwardResult { probability, beta })
}
