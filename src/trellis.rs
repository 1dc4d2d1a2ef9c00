//! Dense state × time grid used by every recurrence.
//!
//! A `Trellis<T>` stores `n_states * n_steps` cells contiguously in row-major
//! order: row `s` holds the values of state `s` for `t = 0..n_steps`.

use std::ops::Index;

/// N×T grid of per-(state, time) values.
///
/// `cells.len() == n_states * n_steps` always holds, including after
/// deserialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawTrellis<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Trellis<T> {
    n_states: usize,
    n_steps: usize,
    cells: Vec<T>,
}

/// Unvalidated wire form; deserializing a [`Trellis`] checks the cell count.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTrellis<T> {
    n_states: usize,
    n_steps: usize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawTrellis<T>> for Trellis<T> {
    type Error = crate::error::HmmError;

    fn try_from(raw: RawTrellis<T>) -> crate::error::Result<Self> {
        let expected = raw.n_states.checked_mul(raw.n_steps);
        if expected != Some(raw.cells.len()) {
            return Err(crate::error::ShapeMismatch::TrellisCells {
                len: raw.cells.len(),
                expected: expected.unwrap_or(usize::MAX),
            }
            .into());
        }
        Ok(Self {
            n_states: raw.n_states,
            n_steps: raw.n_steps,
            cells: raw.cells,
        })
    }
}

impl<T: Clone> Trellis<T> {
    /// Allocate an N×T trellis with every cell set to `fill`.
    pub fn filled(n_states: usize, n_steps: usize, fill: T) -> Self {
        Self {
            n_states,
            n_steps,
            cells: vec![fill; n_states * n_steps],
        }
    }
}

impl<T> Trellis<T> {
    /// Number of rows (hidden states).
    #[inline]
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Number of columns (time steps).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// `(n_states, n_steps)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_states, self.n_steps)
    }

    #[inline]
    fn offset(&self, state: usize, t: usize) -> usize {
        debug_assert!(state < self.n_states && t < self.n_steps);
        state * self.n_steps + t
    }

    /// Cell at `(state, t)`, or `None` outside the grid.
    pub fn get(&self, state: usize, t: usize) -> Option<&T> {
        if state < self.n_states && t < self.n_steps {
            self.cells.get(self.offset(state, t))
        } else {
            None
        }
    }

    /// All time steps of one state.
    pub fn row(&self, state: usize) -> &[T] {
        assert!(state < self.n_states, "row {state} out of range 0..{}", self.n_states);
        let start = state * self.n_steps;
        &self.cells[start..start + self.n_steps]
    }

    /// All states at one time step, in state order.
    pub fn column(&self, t: usize) -> impl ExactSizeIterator<Item = &T> + '_ {
        assert!(t < self.n_steps, "column {t} out of range 0..{}", self.n_steps);
        (0..self.n_states).map(move |s| &self.cells[s * self.n_steps + t])
    }

    /// Overwrite column `t` with `values` (one per state).
    ///
    /// # Panics
    /// Panics if `values.len() != n_states` or `t` is out of range.
    pub fn set_column(&mut self, t: usize, values: &[T])
    where
        T: Clone,
    {
        assert_eq!(values.len(), self.n_states, "column height mismatch");
        assert!(t < self.n_steps, "column {t} out of range 0..{}", self.n_steps);
        for (s, v) in values.iter().enumerate() {
            let idx = self.offset(s, t);
            self.cells[idx] = v.clone();
        }
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Build a new trellis of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Trellis<U> {
        Trellis {
            n_states: self.n_states,
            n_steps: self.n_steps,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Rows as nested vectors, `[state][t]`.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.n_states).map(|s| self.row(s).to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Trellis<T> {
    type Output = T;

    /// Index by `(state, t)`.
    fn index(&self, (state, t): (usize, usize)) -> &T {
        assert!(
            state < self.n_states && t < self.n_steps,
            "cell ({state}, {t}) out of range for {}x{} trellis",
            self.n_states,
            self.n_steps
        );
        &self.cells[state * self.n_steps + t]
    }
}
