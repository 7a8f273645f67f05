use jetty::PseudoJet;
use log::debug;

use crate::core::record::ParticleRecord;
use crate::core::species::Species;
use crate::error::{Error, Result};

/// Default maximum particle pseudorapidity.
pub const DEFAULT_MAX_ETA: f64 = 0.7;
/// Default minimum pt for hadron-class species (GeV).
pub const DEFAULT_MIN_PT_HADRON: f64 = 0.15;
/// Default minimum pt for photon/electron-class species (GeV).
pub const DEFAULT_MIN_PT_PHOTON: f64 = 0.3;
/// Default maximum production-vertex distance (microns).
pub const DEFAULT_MAX_VERTEX_DIST: f64 = 100.0;

/// Vertex coordinates arrive in mm; the vertex-distance cut is configured in
/// microns and scaled here before squaring.
const MM_PER_MICRON: f64 = 1.0e-3;

/// Acceptance cuts applied during particle selection.
///
/// Immutable once constructed; all thresholds are validated non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutConfig {
    /// Maximum |pseudorapidity| for accepted particles.
    pub max_eta: f64,
    /// Minimum pt for hadron-class species (GeV).
    pub min_pt_hadron: f64,
    /// Minimum pt for photon/electron-class species (GeV).
    pub min_pt_photon: f64,
    /// Maximum production-vertex distance from the origin (microns).
    pub max_vertex_dist: f64,
}

impl CutConfig {
    /// Create a cut configuration after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any threshold is negative or non-finite.
    pub fn new(
        max_eta: f64,
        min_pt_hadron: f64,
        min_pt_photon: f64,
        max_vertex_dist: f64,
    ) -> Result<Self> {
        for (name, value) in [
            ("max_eta", max_eta),
            ("min_pt_hadron", min_pt_hadron),
            ("min_pt_photon", min_pt_photon),
            ("max_vertex_dist", max_vertex_dist),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParam(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(Self {
            max_eta,
            min_pt_hadron,
            min_pt_photon,
            max_vertex_dist,
        })
    }

    /// Squared vertex-distance threshold in mm^2, for comparison against
    /// vertex coordinates as delivered by the generator.
    #[inline]
    fn max_vertex_dist_sq_mm(&self) -> f64 {
        let d = self.max_vertex_dist * MM_PER_MICRON;
        d * d
    }
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            max_eta: DEFAULT_MAX_ETA,
            min_pt_hadron: DEFAULT_MIN_PT_HADRON,
            min_pt_photon: DEFAULT_MIN_PT_PHOTON,
            max_vertex_dist: DEFAULT_MAX_VERTEX_DIST,
        }
    }
}

/// An accepted particle: four-momentum plus its origin tag.
#[derive(Debug, Clone, Copy)]
pub struct SelectedParticle {
    /// Four-momentum handed to jet clustering.
    pub momentum: PseudoJet,
    /// Index of the particle in the raw input collection.
    pub origin: usize,
    /// Classified species.
    pub species: Species,
    /// Whether the species is detector-visible.
    pub detectable: bool,
}

/// Output of one selection pass.
///
/// `detectable` holds independent copies of the detectable entries of `all`;
/// both preserve the relative order of the raw input.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Every particle that passed qualification and acceptance.
    pub all: Vec<SelectedParticle>,
    /// The detector-visible subset of `all`.
    pub detectable: Vec<SelectedParticle>,
}

/// Strip a selected collection down to the bare four-momenta.
pub fn four_momenta(particles: &[SelectedParticle]) -> Vec<PseudoJet> {
    particles.iter().map(|p| p.momentum).collect()
}

/// Applies acceptance and detectability cuts to raw particle records.
#[derive(Debug, Clone, Copy)]
pub struct ParticleSelector {
    cuts: CutConfig,
}

impl ParticleSelector {
    /// Create a selector with the given cuts.
    pub fn new(cuts: CutConfig) -> Self {
        Self { cuts }
    }

    /// The cuts this selector applies.
    pub fn cuts(&self) -> &CutConfig {
        &self.cuts
    }

    /// Run one selection pass over a raw particle collection.
    ///
    /// Per-particle rejection is pure filtering; the pass itself cannot
    /// fail. Cut order: vertex distance, species qualification, kinematics
    /// (particles with pt = 0 have no finite pseudorapidity and are
    /// dropped), |eta| window, species-dependent pt floor.
    pub fn select(&self, records: &[ParticleRecord]) -> Selection {
        let dca_max_sq = self.cuts.max_vertex_dist_sq_mm();
        let mut selection = Selection::default();
        for (origin, rec) in records.iter().enumerate() {
            if rec.vertex_dist_sq() >= dca_max_sq {
                continue;
            }
            let Some(species) = rec.species() else {
                continue;
            };
            if !species.qualifies() {
                continue;
            }
            let Some(eta) = rec.pseudorapidity() else {
                continue;
            };
            if eta.abs() >= self.cuts.max_eta {
                continue;
            }
            let floor = if species.uses_photon_floor() {
                self.cuts.min_pt_photon
            } else {
                self.cuts.min_pt_hadron
            };
            if rec.pt() <= floor {
                continue;
            }

            let detectable = species.is_detectable();
            let particle = SelectedParticle {
                momentum: [rec.e, rec.px, rec.py, rec.pz].into(),
                origin,
                species,
                detectable,
            };
            if detectable {
                selection.detectable.push(particle);
            }
            selection.all.push(particle);
        }
        debug!(
            "selected {} of {} particles, {} detectable",
            selection.all.len(),
            records.len(),
            selection.detectable.len()
        );
        selection
    }
}
