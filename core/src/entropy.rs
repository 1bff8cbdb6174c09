//! Randomness used by the padding and random-base variants.
//!
//! Obfuscation only; none of this is suitable for anything security
//! sensitive. The process-wide source is a [`SmallRng`] behind a mutex so
//! the generators can be called from any thread.

use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

static GLOBAL: OnceLock<SeededEntropy> = OnceLock::new();

/// A uniform integer source.
pub trait Entropy: Send + Sync {
    /// Returns an integer uniformly drawn from `[0, n)`. `n == 0` behaves as `n == 1`.
    fn uniform_below(&self, n: u32) -> u32;
}

pub struct SeededEntropy {
    rng: Mutex<SmallRng>,
}

impl SeededEntropy {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }
}

impl Entropy for SeededEntropy {
    fn uniform_below(&self, n: u32) -> u32 {
        // A panic while holding the lock cannot leave the RNG half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..n.max(1))
    }
}

/// The process-wide source, seeded from the clock on first use unless
/// [`seed_global`] ran before it.
pub fn global() -> &'static SeededEntropy {
    GLOBAL.get_or_init(|| {
        let seed = clock_seed();
        debug!("seeding global entropy from clock ({seed})");
        SeededEntropy::from_seed(seed)
    })
}

/// Fixes the seed of the process-wide source.
///
/// Returns `false` when the source was already initialised; the existing
/// state is then kept.
pub fn seed_global(seed: u64) -> bool {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        debug!("seeding global entropy with {seed}");
        SeededEntropy::from_seed(seed)
    });

    if !installed {
        warn!("global entropy already initialised, ignoring seed {seed}");
    }
    installed
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
