use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::efficiency::{DefaultEfficiency, Efficiency};
use crate::core::select::SelectedParticle;
use crate::core::source::SEED_MODULUS;
use crate::error::{Error, Result};

/// Applies the stochastic detector response to the detectable subset of a
/// selection: one Bernoulli(efficiency(pt)) trial per particle.
///
/// Photons, electrons and positrons are assumed to be registered with
/// near-perfect efficiency and bypass the trial. The filter owns its RNG,
/// seeded once at construction; use [`crate::core::source::time_seed`] to
/// reproduce the batch-job seeding contract.
#[derive(Debug)]
pub struct DetectionFilter<E = DefaultEfficiency> {
    efficiency: E,
    rng: StdRng,
}

impl DetectionFilter<DefaultEfficiency> {
    /// Create a filter using the built-in efficiency curve.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `seed` is outside the seed modulus range.
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_efficiency(DefaultEfficiency, seed)
    }
}

impl<E: Efficiency> DetectionFilter<E> {
    /// Create a filter with a custom efficiency model.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `seed` is outside the seed modulus range.
    pub fn with_efficiency(efficiency: E, seed: u64) -> Result<Self> {
        if seed >= SEED_MODULUS {
            return Err(Error::InvalidParam(format!(
                "seed {seed} outside the modulus range (< {SEED_MODULUS})"
            )));
        }
        Ok(Self {
            efficiency,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Cull the detectable subset with one independent trial per particle.
    ///
    /// The trial probability is clamped into [0, 1], so an efficiency model
    /// evaluated outside its validity window degrades to keep-always or
    /// drop-always instead of panicking the RNG.
    pub fn cull(&mut self, detectable: &[SelectedParticle]) -> Vec<SelectedParticle> {
        let mut kept = Vec::with_capacity(detectable.len());
        for particle in detectable {
            if particle.species.uses_photon_floor() {
                kept.push(*particle);
                continue;
            }
            let pt = particle.momentum.pt().raw();
            let odds = self.efficiency.eval(pt).clamp(0.0, 1.0);
            if self.rng.random_bool(odds) {
                kept.push(*particle);
            }
        }
        debug!("detection kept {} of {} particles", kept.len(), detectable.len());
        kept
    }
}
