use particle_id::ParticleID;
use std::f64::consts::PI;

use crate::core::species::Species;

/// One generated particle as delivered by the event source.
///
/// Fields:
/// - `id`: PDG Monte Carlo code
/// - `px`, `py`, `pz`: momentum components (GeV)
/// - `e`: energy (GeV)
/// - `vertex`: production-vertex position [x, y, z] (mm)
///
/// Records are read-only to the analysis core; the selector derives all
/// kinematic quantities from them during one selection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRecord {
    /// PDG species code.
    pub id: ParticleID,
    /// Momentum x-component (GeV).
    pub px: f64,
    /// Momentum y-component (GeV).
    pub py: f64,
    /// Momentum z-component (GeV), along the beam axis.
    pub pz: f64,
    /// Energy (GeV).
    pub e: f64,
    /// Production vertex [x, y, z] (mm).
    pub vertex: [f64; 3],
}

impl ParticleRecord {
    /// Create a record from raw generator output.
    pub fn new(id: ParticleID, px: f64, py: f64, pz: f64, e: f64, vertex: [f64; 3]) -> Self {
        Self {
            id,
            px,
            py,
            pz,
            e,
            vertex,
        }
    }

    /// Classified species, if the PDG code is one the analysis knows.
    #[inline]
    pub fn species(&self) -> Option<Species> {
        Species::from_id(self.id)
    }

    /// Transverse momentum sqrt(px^2 + py^2).
    #[inline]
    pub fn pt(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }

    /// Total momentum magnitude sqrt(px^2 + py^2 + pz^2).
    #[inline]
    pub fn momentum_mag(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Pseudorapidity 0.5 * ln((p + pz) / (p - pz)).
    ///
    /// Returns `None` for purely longitudinal momenta (pt = 0), where the
    /// formula has no finite value; callers reject such particles.
    #[inline]
    pub fn pseudorapidity(&self) -> Option<f64> {
        let pt2 = self.px * self.px + self.py * self.py;
        if pt2 <= 0.0 {
            return None;
        }
        let p = self.momentum_mag();
        Some(0.5 * ((p + self.pz) / (p - self.pz)).ln())
    }

    /// Azimuthal angle pi + atan2(-py, -px), in [0, 2*pi).
    #[inline]
    pub fn azimuth(&self) -> f64 {
        PI + f64::atan2(-self.py, -self.px)
    }

    /// Squared distance of the production vertex from the origin (mm^2).
    #[inline]
    pub fn vertex_dist_sq(&self) -> f64 {
        let [x, y, z] = self.vertex;
        x * x + y * y + z * z
    }
}
