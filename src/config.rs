//! The synthesizer's entire configuration surface: a seed override for
//! determinism, the attempt cap, and an optional wall-clock budget.

use std::time::Instant;

/// Knobs accepted by [`crate::synth::synthesize`] and, through it, by
/// [`crate::driver::generate`].
#[derive(Clone, Debug)]
pub struct SynthesisConfig {
    /// Overrides the per-synthesis random seed. Defaults to a time-derived
    /// seed when unset, but callers (especially tests) can pin it to make
    /// `synthesize` fully deterministic.
    pub seed: Option<u64>,
    /// The maximum number of independent attempts to run (default: 100).
    pub max_attempts: usize,
    /// If set, no new attempt starts once this instant has passed; the
    /// best attempt so far is returned instead.
    pub deadline: Option<Instant>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self { seed: None, max_attempts: 100, deadline: None }
    }
}

impl SynthesisConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub(crate) fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
