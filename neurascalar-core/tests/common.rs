use neurascalar_core::nn::{Mlp, MlpConfig};
use neurascalar_core::NeuraScalarError;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The 2 -> 4 -> 1 tanh network used across the end-to-end tests.
#[allow(dead_code)]
pub fn small_mlp(seed: u64) -> Result<Mlp, NeuraScalarError> {
    Mlp::new(&MlpConfig::new(2, vec![4, 1]).with_seed(seed))
}
