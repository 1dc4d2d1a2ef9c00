//! Plain probability products have no scaling; these tests pin down where
//! that runs out.

use hmm_trellis::{forward, viterbi, Hmm};

fn fair_coin() -> Hmm {
    Hmm::new(
        vec![vec![0.5, 0.5], vec![0.5, 0.5]],
        vec![vec![0.5, 0.5], vec![0.5, 0.5]],
        vec![0.5, 0.5],
    )
    .unwrap()
}

#[test]
fn moderate_sequence_stays_exact() {
    // P(O) = 0.5^T for any O; 2^-500 is still a normal f64.
    let obs = vec![1usize; 500];
    let res = forward(&fair_coin(), &obs).unwrap();
    assert_eq!(res.probability, 0.5f64.powi(500));
}

#[test]
fn long_sequence_underflows_to_zero() {
    // 2^-2000 is below the smallest subnormal f64.
    let obs = vec![0usize; 2000];
    let res = forward(&fair_coin(), &obs).unwrap();
    assert_eq!(res.probability, 0.0);
    assert!(res.alpha.row(0).iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[test]
fn viterbi_still_returns_a_full_path_after_underflow() {
    let obs = vec![0usize; 2000];
    let res = viterbi(&fair_coin(), &obs).unwrap();
    assert_eq!(res.best_probability(), 0.0);
    assert_eq!(res.states.len(), obs.len());
    // every candidate is zero once underflowed, so the lowest index wins
    assert_eq!(res.states[obs.len() - 1], 0);
}
