//! Example: likelihood and decoding for a two-state weather model.
//!
//! Run with:
//! `cargo run --example decode`

use hmm_trellis::{forward, viterbi, Hmm, Result};

fn main() -> Result<()> {
    // States: 0 = rainy, 1 = sunny
    // Observations: 0 = umbrella, 1 = no umbrella
    let hmm = Hmm::new(
        vec![vec![0.7, 0.3], vec![0.4, 0.6]],
        vec![
            vec![0.9, 0.1], // rainy days mostly see umbrellas
            vec![0.2, 0.8],
        ],
        vec![0.6, 0.4],
    )?;

    let obs = vec![0, 1, 0];

    let fwd = forward(&hmm, &obs)?;
    println!("P(O | model) = {:.6}", fwd.probability);
    println!("alpha:");
    for s in 0..hmm.n_states() {
        println!("  state {s}: {:?}", fwd.alpha.row(s));
    }

    let vit = viterbi(&hmm, &obs)?;
    println!("Best path probability: {:.6}", vit.best_probability());
    println!("State sequence:");
    for (t, s) in vit.states.iter().enumerate() {
        println!("  t = {t:2}, obs = {}, state = {s}", obs[t]);
    }
    Ok(())
}
