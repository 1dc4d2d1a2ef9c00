//! Trellis inference for discrete Hidden Markov Models.
//!
//! This crate evaluates a fixed HMM `(A, B, pi)` against one observation
//! sequence with classic column-by-column dynamic programming over an N×T
//! trellis (N states, T time steps).
//!
//! ## Core idea
//! 1. Build a shape-checked [`Hmm`] from its transition matrix `A` (N×N),
//!    emission matrix `B` (N×M) and initial distribution `pi` (N).
//! 2. Encode observations as symbol indices in `0..M`.
//! 3. Run [`forward`] for the sequence likelihood, [`viterbi`] for the most
//!    probable state path, or [`backward`] for the backward trellis.
//!
//! Each call allocates and returns its own trellis; nothing is shared between
//! calls.
//!
//! ## Quick start
//! ```
//! use hmm_trellis::{forward, viterbi, Hmm};
//!
//! let hmm = Hmm::new(
//!     vec![vec![0.7, 0.3], vec![0.4, 0.6]],
//!     vec![vec![0.9, 0.1], vec![0.2, 0.8]],
//!     vec![0.6, 0.4],
//! )
//! .unwrap();
//! let obs = [0, 1, 0];
//!
//! let fwd = forward(&hmm, &obs).unwrap();
//! assert!((fwd.probability - 0.10893).abs() < 1e-12);
//!
//! let vit = viterbi(&hmm, &obs).unwrap();
//! assert_eq!(vit.states, vec![0, 1, 0]);
//! ```
//!
//! ## Numerical limits
//! Probabilities are multiplied directly. For long sequences the trellis
//! values underflow toward (and eventually reach) zero; there is no scaling
//! or log-space mode. Rows of `A`, `B` and `pi` are assumed to be probability
//! distributions and are never checked: only shapes are validated.
//!
//! ## Features
//! - `parallel`: compute the cells of wide columns on rayon.
//! - `tracing`: emit spans around each sweep and a debug event per result.
//! - `serde`: (de)serialize [`Hmm`] (shape-checked on the way in) and results.

pub mod algorithms;
pub mod builder;
pub mod engine;
pub mod error;
pub mod model;
pub mod traits;
pub mod trellis;
pub mod utils;

pub use crate::algorithms::backward::{backward, backward_with, BackwardResult};
pub use crate::algorithms::forward::{forward, forward_with, ForwardResult};
pub use crate::algorithms::viterbi::{traceback, viterbi, viterbi_with, ViterbiResult};
pub use crate::builder::TrellisEngineBuilder;
pub use crate::engine::TrellisEngine;
pub use crate::error::{HmmError, Result, ShapeMismatch};
pub use crate::model::Hmm;
pub use crate::traits::{Sweep, TrellisRecurrence};
pub use crate::trellis::Trellis;
