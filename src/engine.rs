//! Generic trellis engine.
//!
//! The engine fills an N×T [`Trellis`] one column at a time in the direction
//! given by the recurrence:
//! 1. The boundary column comes from [`TrellisRecurrence::boundary_cell`].
//! 2. Every later column is induced from the column before it in sweep order.
//!
//! Columns are strictly sequential. Cells within one column are independent,
//! so with the `parallel` feature a wide column is fanned out over rayon.
//!
//! The engine is completely generic over implementations of [`TrellisRecurrence`].

use crate::traits::{Sweep, TrellisRecurrence};
use crate::trellis::Trellis;
use crate::utils::default_parallel_threshold;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Column-sweep driver for any [`TrellisRecurrence`].
///
/// The engine holds configuration only; every call to [`run`](Self::run)
/// allocates and returns its own trellis.
///
/// ```
/// use hmm_trellis::{algorithms::forward::forward_with, Hmm, TrellisEngine};
///
/// let hmm = Hmm::new(
///     vec![vec![0.7, 0.3], vec![0.4, 0.6]],
///     vec![vec![0.9, 0.1], vec![0.2, 0.8]],
///     vec![0.6, 0.4],
/// )
/// .unwrap();
/// let engine = TrellisEngine::new();
/// let result = forward_with(&engine, &hmm, &[0, 1, 0]).unwrap();
/// assert_eq!(result.alpha.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrellisEngine {
    parallel_threshold: usize,
}

impl TrellisEngine {
    /// Create an engine with the default parallel threshold.
    pub fn new() -> Self {
        Self::with_parallel_threshold(default_parallel_threshold())
    }

    /// Create an engine that fans out columns with at least `threshold` states.
    ///
    /// Without the `parallel` feature the threshold is recorded but every
    /// column is computed sequentially.
    ///
    /// # Panics
    /// Panics if `threshold == 0`.
    pub fn with_parallel_threshold(threshold: usize) -> Self {
        assert!(threshold > 0, "parallel_threshold must be positive");
        Self {
            parallel_threshold: threshold,
        }
    }

    /// Return the configured parallel threshold.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for TrellisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "parallel")]
impl TrellisEngine {
    /// Fill the full trellis for `recurrence`.
    ///
    /// # Panics
    /// Panics if the recurrence reports zero states or zero steps.
    pub fn run<R>(&self, recurrence: &R) -> Trellis<R::Cell>
    where
        R: TrellisRecurrence + Sync,
        R::Cell: Send + Sync,
    {
        let n = recurrence.num_states();
        let parallel = n >= self.parallel_threshold;
        sweep(recurrence, |t, adjacent| {
            if parallel {
                (0..n)
                    .into_par_iter()
                    .map(|s| recurrence.induce_cell(t, s, adjacent))
                    .collect()
            } else {
                induce_sequential(recurrence, t, adjacent)
            }
        })
    }
}

#[cfg(not(feature = "parallel"))]
impl TrellisEngine {
    /// Fill the full trellis for `recurrence`.
    ///
    /// # Panics
    /// Panics if the recurrence reports zero states or zero steps.
    pub fn run<R>(&self, recurrence: &R) -> Trellis<R::Cell>
    where
        R: TrellisRecurrence,
    {
        sweep(recurrence, |t, adjacent| {
            induce_sequential(recurrence, t, adjacent)
        })
    }
}

fn induce_sequential<R>(recurrence: &R, t: usize, adjacent: &[R::Cell]) -> Vec<R::Cell>
where
    R: TrellisRecurrence,
{
    (0..recurrence.num_states())
        .map(|s| recurrence.induce_cell(t, s, adjacent))
        .collect()
}

/// Shared sweep skeleton: boundary column, then one induced column per step.
fn sweep<R, F>(recurrence: &R, mut induce_column: F) -> Trellis<R::Cell>
where
    R: TrellisRecurrence,
    F: FnMut(usize, &[R::Cell]) -> Vec<R::Cell>,
{
    let n = recurrence.num_states();
    let steps = recurrence.num_steps();
    assert!(n > 0, "recurrence must have at least one state");
    assert!(steps > 0, "recurrence must have at least one step");

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("trellis_sweep", states = n, steps, sweep = ?recurrence.sweep());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let order: Vec<usize> = match recurrence.sweep() {
        Sweep::LeftToRight => (0..steps).collect(),
        Sweep::RightToLeft => (0..steps).rev().collect(),
    };

    let mut adjacent: Vec<R::Cell> = (0..n).map(|s| recurrence.boundary_cell(s)).collect();
    let mut trellis = Trellis::filled(n, steps, adjacent[0].clone());
    trellis.set_column(order[0], &adjacent);

    for &t in &order[1..] {
        #[cfg(feature = "tracing")]
        let column_span = tracing::trace_span!("induce_column", t);
        #[cfg(feature = "tracing")]
        let _column_enter = column_span.enter();

        let column = induce_column(t, &adjacent);
        debug_assert_eq!(column.len(), n);
        trellis.set_column(t, &column);
        adjacent = column;
    }

    trellis
}
