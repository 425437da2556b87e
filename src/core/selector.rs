//! Uniform random selection among unused candidates

use rand::Rng;

use crate::types::Candidate;

/// Pick one candidate uniformly at random.
///
/// The generator is injected so the caller controls determinism: seeded in
/// mock mode and tests, entropy-seeded in production. Panics if `candidates`
/// is empty; the orchestrator rejects an empty set before calling.
pub fn pick<'a, R: Rng>(candidates: &'a [Candidate], rng: &mut R) -> &'a Candidate {
    let index = rng.gen_range(0..candidates.len());
    &candidates[index]
}
