use hmm_trellis::{backward, forward, viterbi, Hmm};
use proptest::prelude::*;

/// Every state path of length `t` over `n` states, in lexicographic order.
fn all_paths(n: usize, t: usize) -> Vec<Vec<usize>> {
    let mut paths = vec![Vec::new()];
    for _ in 0..t {
        let mut next = Vec::with_capacity(paths.len() * n);
        for p in &paths {
            for s in 0..n {
                let mut q = p.clone();
                q.push(s);
                next.push(q);
            }
        }
        paths = next;
    }
    paths
}

fn path_prob(hmm: &Hmm, path: &[usize], obs: &[usize]) -> f64 {
    let mut p = hmm.initials()[path[0]] * hmm.emissions()[path[0]][obs[0]];
    for t in 1..obs.len() {
        p *= hmm.transitions()[path[t - 1]][path[t]];
        p *= hmm.emissions()[path[t]][obs[t]];
    }
    p
}

fn normalize(row: Vec<f64>) -> Vec<f64> {
    let total: f64 = row.iter().sum();
    row.into_iter().map(|v| v / total).collect()
}

/// Row-stochastic model with 1..=3 states, 1..=3 symbols, and 1..=4 observations.
fn model_and_obs() -> impl Strategy<Value = (Hmm, Vec<usize>)> {
    (1usize..=3, 1usize..=3).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(prop::collection::vec(0.05f64..1.0, n), n),
            prop::collection::vec(prop::collection::vec(0.05f64..1.0, m), n),
            prop::collection::vec(0.05f64..1.0, n),
            prop::collection::vec(0..m, 1..=4),
        )
            .prop_map(|(a, b, pi, obs)| {
                let a = a.into_iter().map(normalize).collect();
                let b = b.into_iter().map(normalize).collect();
                let hmm = Hmm::new(a, b, normalize(pi)).unwrap();
                (hmm, obs)
            })
    })
}

proptest! {
    #[test]
    fn forward_matches_path_enumeration((hmm, obs) in model_and_obs()) {
        let total: f64 = all_paths(hmm.n_states(), obs.len())
            .iter()
            .map(|p| path_prob(&hmm, p, &obs))
            .sum();
        let res = forward(&hmm, &obs).unwrap();
        prop_assert!((res.probability - total).abs() < 1e-12);
        prop_assert!(res.probability >= 0.0 && res.probability <= 1.0 + 1e-12);
    }

    #[test]
    fn viterbi_matches_path_enumeration((hmm, obs) in model_and_obs()) {
        let best = all_paths(hmm.n_states(), obs.len())
            .iter()
            .map(|p| path_prob(&hmm, p, &obs))
            .fold(f64::NEG_INFINITY, f64::max);
        let res = viterbi(&hmm, &obs).unwrap();
        let last = obs.len() - 1;
        let delta_max = res
            .delta
            .column(last)
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((delta_max - best).abs() < 1e-12);
        prop_assert!((res.best_probability() - best).abs() < 1e-12);
        // the decoded path must actually achieve the maximum
        let decoded = path_prob(&hmm, &res.states, &obs);
        prop_assert!((decoded - best).abs() < 1e-12);
    }

    #[test]
    fn backward_likelihood_matches_forward((hmm, obs) in model_and_obs()) {
        let fwd = forward(&hmm, &obs).unwrap();
        let bwd = backward(&hmm, &obs).unwrap();
        prop_assert!((fwd.probability - bwd.probability).abs() < 1e-12);
    }

    #[test]
    fn alpha_beta_product_is_constant_over_time((hmm, obs) in model_and_obs()) {
        let fwd = forward(&hmm, &obs).unwrap();
        let bwd = backward(&hmm, &obs).unwrap();
        for t in 0..obs.len() {
            let at_t: f64 = (0..hmm.n_states())
                .map(|s| fwd.alpha[(s, t)] * bwd.beta[(s, t)])
                .sum();
            prop_assert!((at_t - fwd.probability).abs() < 1e-12);
        }
    }
}

#[test]
fn enumeration_helper_covers_all_paths() {
    let paths = all_paths(3, 2);
    assert_eq!(paths.len(), 9);
    assert_eq!(paths[0], vec![0, 0]);
    assert_eq!(paths[8], vec![2, 2]);
}
