//! Core trait definitions for column-by-column trellis recurrences.
//!
//! To run a recurrence through [`TrellisEngine`](crate::engine::TrellisEngine),
//! implement [`TrellisRecurrence`] for a struct that captures the instance
//! (model and observation sequence).
//!
//! The trait encodes the shape shared by forward, backward and Viterbi:
//! - Layered structure: columns `0..T`, one per observation.
//! - A boundary column computed from the model alone.
//! - An induction step where every cell of a column depends only on the
//!   whole adjacent column already computed and fixed problem data.
//!
//! Because no cell reads another cell of its own column, the engine is free
//! to compute the cells of one column in any order, including in parallel.

/// Direction in which columns are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Boundary at `t = 0`; column `t` depends on column `t - 1`.
    LeftToRight,
    /// Boundary at `t = T - 1`; column `t` depends on column `t + 1`.
    RightToLeft,
}

/// A trellis recurrence over `num_states()` rows and `num_steps()` columns.
///
/// Semantics:
/// - `boundary_cell(s)` fills the first column of the sweep.
/// - `induce_cell(t, s, adjacent)` fills cell `(s, t)` from the column
///   computed immediately before it in sweep order.
/// - Implementations must be pure: the same inputs always give the same cell.
pub trait TrellisRecurrence {
    /// Value stored in each trellis cell.
    type Cell: Clone;

    /// Number of rows `N`.
    fn num_states(&self) -> usize;

    /// Number of columns `T`. Must be at least 1.
    fn num_steps(&self) -> usize;

    /// Fill direction. Defaults to left-to-right.
    fn sweep(&self) -> Sweep {
        Sweep::LeftToRight
    }

    /// Cell for `state` in the boundary column.
    fn boundary_cell(&self, state: usize) -> Self::Cell;

    /// Cell for `(state, t)` given the adjacent column in sweep order.
    ///
    /// Requirements:
    /// - Must only read `adjacent` and fixed problem data.
    /// - `adjacent.len() == num_states()`.
    fn induce_cell(&self, t: usize, state: usize, adjacent: &[Self::Cell]) -> Self::Cell;
}
