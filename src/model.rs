//! Discrete hidden Markov model parameters.

use crate::error::{Result, ShapeMismatch};

/// Hidden Markov Model with `N` discrete states and an alphabet of `M` symbols.
///
/// Shapes are checked once in [`Hmm::new`]. Whether the rows are probability
/// distributions is never checked: rows that do not sum to 1 are accepted and
/// produce results without probabilistic meaning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHmm")
)]
pub struct Hmm {
    /// Transition probabilities `[s_from][s_to]`, N×N.
    a: Vec<Vec<f64>>,
    /// Emission probabilities `[s][symbol]`, N×M.
    b: Vec<Vec<f64>>,
    /// Initial state probabilities `[s]`, length N.
    pi: Vec<f64>,
}

/// Unvalidated wire form; deserializing an [`Hmm`] goes through [`Hmm::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHmm {
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
    pi: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHmm> for Hmm {
    type Error = crate::error::HmmError;

    fn try_from(raw: RawHmm) -> Result<Self> {
        Hmm::new(raw.a, raw.b, raw.pi)
    }
}

impl Hmm {
    /// Build a model from its transition matrix `a`, emission matrix `b` and
    /// initial distribution `pi`.
    ///
    /// # Errors
    /// Returns [`HmmError::ShapeMismatch`] if there are no states or symbols,
    /// `a` is not N×N, `b` does not have N rows of equal length, or `pi` does
    /// not have length N, where N is the number of rows of `a`.
    pub fn new(a: Vec<Vec<f64>>, b: Vec<Vec<f64>>, pi: Vec<f64>) -> Result<Self> {
        let n = a.len();
        if n == 0 {
            return Err(ShapeMismatch::NoStates.into());
        }
        for (row, r) in a.iter().enumerate() {
            if r.len() != n {
                return Err(ShapeMismatch::TransitionRow {
                    row,
                    len: r.len(),
                    expected: n,
                }
                .into());
            }
        }
        if b.len() != n {
            return Err(ShapeMismatch::EmissionRows {
                rows: b.len(),
                expected: n,
            }
            .into());
        }
        let m = b[0].len();
        if m == 0 {
            return Err(ShapeMismatch::NoSymbols.into());
        }
        for (row, r) in b.iter().enumerate() {
            if r.len() != m {
                return Err(ShapeMismatch::EmissionRow {
                    row,
                    len: r.len(),
                    expected: m,
                }
                .into());
            }
        }
        if pi.len() != n {
            return Err(ShapeMismatch::InitialLength {
                len: pi.len(),
                expected: n,
            }
            .into());
        }
        Ok(Self { a, b, pi })
    }

    /// Number of hidden states `N`.
    #[inline]
    pub fn n_states(&self) -> usize {
        self.pi.len()
    }

    /// Alphabet size `M`.
    #[inline]
    pub fn n_symbols(&self) -> usize {
        self.b[0].len()
    }

    /// Transition probability from `from` to `to`.
    #[inline]
    pub fn transition(&self, from: usize, to: usize) -> f64 {
        self.a[from][to]
    }

    /// Emission probability of `symbol` in `state`.
    #[inline]
    pub fn emission(&self, state: usize, symbol: usize) -> f64 {
        self.b[state][symbol]
    }

    /// Initial probability of `state`.
    #[inline]
    pub fn initial(&self, state: usize) -> f64 {
        self.pi[state]
    }

    /// Transition matrix rows, `[s_from][s_to]`.
    pub fn transitions(&self) -> &[Vec<f64>] {
        &self.a
    }

    /// Emission matrix rows, `[s][symbol]`.
    pub fn emissions(&self) -> &[Vec<f64>] {
        &self.b
    }

    /// Initial distribution over states.
    pub fn initials(&self) -> &[f64] {
        &self.pi
    }

    /// Check that `obs` is non-empty and every symbol is a column of B.
    ///
    /// # Errors
    /// [`ShapeMismatch::EmptyObservations`] or [`ShapeMismatch::SymbolOutOfRange`]
    /// for the first offending position.
    pub fn check_observations(&self, obs: &[usize]) -> Result<()> {
        if obs.is_empty() {
            return Err(ShapeMismatch::EmptyObservations.into());
        }
        let alphabet = self.n_symbols();
        match obs.iter().position(|&o| o >= alphabet) {
            Some(t) => Err(ShapeMismatch::SymbolOutOfRange {
                t,
                symbol: obs[t],
                alphabet,
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Joint probability of one explicit state path and the observations:
    /// `pi[s0] B[s0,o0] Π A[s(t-1),s(t)] B[s(t),o(t)]`.
    ///
    /// # Errors
    /// Shape errors for the observations, a path whose length differs from
    /// the observations, or a state outside `0..N`.
    pub fn path_probability(&self, states: &[usize], obs: &[usize]) -> Result<f64> {
        self.check_observations(obs)?;
        if states.len() != obs.len() {
            return Err(ShapeMismatch::PathLength {
                len: states.len(),
                expected: obs.len(),
            }
            .into());
        }
        let n_states = self.n_states();
        if let Some(t) = states.iter().position(|&s| s >= n_states) {
            return Err(ShapeMismatch::StateOutOfRange {
                t,
                state: states[t],
                n_states,
            }
            .into());
        }

        let mut p = self.initial(states[0]) * self.emission(states[0], obs[0]);
        for t in 1..obs.len() {
            p *= self.transition(states[t - 1], states[t]);
            p *= self.emission(states[t], obs[t]);
        }
        Ok(p)
    }
}
