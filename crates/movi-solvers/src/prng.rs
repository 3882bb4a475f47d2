//! The solver's own PRNG, per §5: process-owned within the solver, never the
//! environment. Seed zero reseeds from entropy; any other seed is deterministic.

use rand::SeedableRng;
use rand_pcg::Pcg64;

pub fn seeded_rng(seed: u64) -> Pcg64 {
    if seed == 0 {
        Pcg64::from_entropy()
    } else {
        Pcg64::seed_from_u64(seed)
    }
}
