//! Concrete trellis recurrences over a discrete [`Hmm`](crate::Hmm).

pub mod backward;
pub mod forward;
pub mod viterbi;
