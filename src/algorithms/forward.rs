//! Forward algorithm (sum-product) as a trellis recurrence.
//!
//! `alpha[s, t]` is the joint probability of `O[0..=t]` and being in state
//! `s` at time `t`:
//! - `alpha[s, 0] = pi[s] * B[s, O[0]]`
//! - `alpha[j, t] = (Σ_i alpha[i, t-1] * A[i, j]) * B[j, O[t]]`
//! - `P(O) = Σ_s alpha[s, T-1]`
//!
//! Probabilities are multiplied directly, without scaling or log space, so
//! long sequences underflow toward zero. Rows of A, B and pi that are not
//! distributions are not detected.

use crate::engine::TrellisEngine;
use crate::error::Result;
use crate::model::Hmm;
use crate::traits::TrellisRecurrence;
use crate::trellis::Trellis;

/// Forward recurrence instance: fixed HMM + observation sequence.
#[derive(Clone, Copy, Debug)]
pub struct ForwardRecurrence<'a> {
    hmm: &'a Hmm,
    obs: &'a [usize],
}

impl<'a> ForwardRecurrence<'a> {
    /// Bind a model to an observation sequence after checking its symbols.
    pub fn new(hmm: &'a Hmm, obs: &'a [usize]) -> Result<Self> {
        hmm.check_observations(obs)?;
        Ok(Self { hmm, obs })
    }
}

impl TrellisRecurrence for ForwardRecurrence<'_> {
    type Cell = f64;

    fn num_states(&self) -> usize {
        self.hmm.n_states()
    }

    fn num_steps(&self) -> usize {
        self.obs.len()
    }

    fn boundary_cell(&self, state: usize) -> f64 {
        self.hmm.initial(state) * self.hmm.emission(state, self.obs[0])
    }

    fn induce_cell(&self, t: usize, state: usize, adjacent: &[f64]) -> f64 {
        let inflow: f64 = adjacent
            .iter()
            .enumerate()
            .map(|(from, &alpha)| alpha * self.hmm.transition(from, state))
            .sum();
        inflow * self.hmm.emission(state, self.obs[t])
    }
}

/// Output of [`forward`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardResult {
    /// `P(O | model)`, the sum of the last alpha column.
    pub probability: f64,
    /// N×T forward trellis.
    pub alpha: Trellis<f64>,
}

/// Likelihood of `obs` under `hmm` and the full forward trellis.
///
/// # Errors
/// [`HmmError::ShapeMismatch`](crate::HmmError::ShapeMismatch) if `obs` is
/// empty or holds a symbol outside `0..M`. Nothing is computed in that case.
pub fn forward(hmm: &Hmm, obs: &[usize]) -> Result<ForwardResult> {
    forward_with(&TrellisEngine::new(), hmm, obs)
}

/// [`forward`] driven by an explicitly configured engine.
pub fn forward_with(engine: &TrellisEngine, hmm: &Hmm, obs: &[usize]) -> Result<ForwardResult> {
    let recurrence = ForwardRecurrence::new(hmm, obs)?;
    let alpha = engine.run(&recurrence);
    let last = alpha.n_steps() - 1;
    let probability: f64 = alpha.column(last).sum();

    #[cfg(feature = "tracing")]
    tracing::debug!(states = hmm.n_states(), steps = obs.len(), probability, "forward complete");

    Ok(ForwardResult { probability, alpha })
}
