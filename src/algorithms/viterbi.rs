//! Viterbi decoding (max-product) as a trellis recurrence.
//!
//! `delta[s, t]` is the probability of the single best state path that ends
//! in `s` at time `t` and explains `O[0..=t]`; `psi[s, t]` is the state at
//! `t - 1` on that path.
//!
//! Each induction cell takes the max over
//! `delta[i, t-1] * A[i, j] * B[j, O[t]]`, resolving ties to the lowest
//! predecessor index. Termination picks the final state with the largest
//! delta (again lowest index on ties) and the path is recovered by walking
//! `psi` backwards from there.

use crate::engine::TrellisEngine;
#[cfg(feature = "serde")]
use crate::error::ShapeMismatch;
use crate::error::Result;
use crate::model::Hmm;
use crate::traits::TrellisRecurrence;
use crate::trellis::Trellis;
use crate::utils::argmax_first_by;

/// One Viterbi cell: best-path probability plus the predecessor achieving it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViterbiCell {
    pub prob: f64,
    /// `None` in the first column.
    pub backpointer: Option<usize>,
}

/// Viterbi recurrence instance: fixed HMM + observation sequence.
#[derive(Clone, Copy, Debug)]
pub struct ViterbiRecurrence<'a> {
    hmm: &'a Hmm,
    obs: &'a [usize],
}

impl<'a> ViterbiRecurrence<'a> {
    /// Bind a model to an observation sequence after checking its symbols.
    pub fn new(hmm: &'a Hmm, obs: &'a [usize]) -> Result<Self> {
        hmm.check_observations(obs)?;
        Ok(Self { hmm, obs })
    }
}

impl TrellisRecurrence for ViterbiRecurrence<'_> {
    type Cell = ViterbiCell;

    fn num_states(&self) -> usize {
        self.hmm.n_states()
    }

    fn num_steps(&self) -> usize {
        self.obs.len()
    }

    fn boundary_cell(&self, state: usize) -> ViterbiCell {
        ViterbiCell {
            prob: self.hmm.initial(state) * self.hmm.emission(state, self.obs[0]),
            backpointer: None,
        }
    }

    fn induce_cell(&self, t: usize, state: usize, adjacent: &[ViterbiCell]) -> ViterbiCell {
        let emit = self.hmm.emission(state, self.obs[t]);
        // adjacent is never empty: the model has at least one state.
        let (from, prob) = argmax_first_by(adjacent.len(), |from| {
            adjacent[from].prob * self.hmm.transition(from, state) * emit
        })
        .unwrap_or((0, 0.0));
        ViterbiCell {
            prob,
            backpointer: Some(from),
        }
    }
}

/// Output of [`viterbi`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawViterbiResult")
)]
pub struct ViterbiResult {
    /// Most probable state sequence, `states[t]` is the state at time `t`.
    pub states: Vec<usize>,
    /// N×T best-path probabilities.
    pub delta: Trellis<f64>,
    /// N×T backpointers; the first column is `None`.
    pub psi: Trellis<Option<usize>>,
}

/// Unvalidated wire form of [`ViterbiResult`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawViterbiResult {
    states: Vec<usize>,
    delta: Trellis<f64>,
    psi: Trellis<Option<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViterbiResult> for ViterbiResult {
    type Error = crate::error::HmmError;

    fn try_from(raw: RawViterbiResult) -> Result<Self> {
        let (n, steps) = raw.delta.shape();
        if n == 0 {
            return Err(ShapeMismatch::NoStates.into());
        }
        if steps == 0 {
            return Err(ShapeMismatch::EmptyObservations.into());
        }
        if raw.psi.shape() != (n, steps) {
            return Err(ShapeMismatch::TrellisShape {
                rows: raw.psi.n_states(),
                cols: raw.psi.n_steps(),
                expected_rows: n,
                expected_cols: steps,
            }
            .into());
        }
        if raw.states.len() != steps {
            return Err(ShapeMismatch::PathLength {
                len: raw.states.len(),
                expected: steps,
            }
            .into());
        }
        if let Some(t) = raw.states.iter().position(|&s| s >= n) {
            return Err(ShapeMismatch::StateOutOfRange {
                t,
                state: raw.states[t],
                n_states: n,
            }
            .into());
        }
        Ok(Self {
            states: raw.states,
            delta: raw.delta,
            psi: raw.psi,
        })
    }
}

impl ViterbiResult {
    /// Probability of the decoded path, the largest value of the last delta column.
    pub fn best_probability(&self) -> f64 {
        let last = self.delta.n_steps() - 1;
        self.delta[(self.states[last], last)]
    }
}

/// Follow backpointers from `last` (the state at `T - 1`) back to `t = 0`.
///
/// Returns the path in chronological order.
///
/// # Panics
/// Panics if a backpointer at `t >= 1` on the followed path is `None`.
pub fn traceback(psi: &Trellis<Option<usize>>, last: usize) -> Vec<usize> {
    let steps = psi.n_steps();
    let mut states = vec![0usize; steps];
    if steps == 0 {
        return states;
    }
    states[steps - 1] = last;
    for t in (0..steps - 1).rev() {
        states[t] = psi[(states[t + 1], t + 1)].expect("backpointer missing after t = 0");
    }
    states
}

/// Most probable state sequence for `obs` under `hmm`, with the delta trellis.
///
/// # Errors
/// [`HmmError::ShapeMismatch`](crate::HmmError::ShapeMismatch) if `obs` is
/// empty or holds a symbol outside `0..M`. Nothing is computed in that case.
pub fn viterbi(hmm: &Hmm, obs: &[usize]) -> Result<ViterbiResult> {
    viterbi_with(&TrellisEngine::new(), hmm, obs)
}

/// [`viterbi`] driven by an explicitly configured engine.
pub fn viterbi_with(engine: &TrellisEngine, hmm: &Hmm, obs: &[usize]) -> Result<ViterbiResult> {
    let recurrence = ViterbiRecurrence::new(hmm, obs)?;
    let cells = engine.run(&recurrence);
    let delta = cells.map(|c| c.prob);
    let psi = cells.map(|c| c.backpointer);

    let last = delta.n_steps() - 1;
    let (best_final, _best) = argmax_first_by(delta.n_states(), |s| delta[(s, last)])
        .unwrap_or((0, 0.0));
    let states = traceback(&psi, best_final);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        states = hmm.n_states(),
        steps = obs.len(),
        best_probability = _best,
        best_final,
        "viterbi complete"
    );

    Ok(ViterbiResult { states, delta, psi })
}
