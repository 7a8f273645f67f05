use particle_id::ParticleID;

/// Particle species the analysis knows about, keyed by PDG Monte Carlo code.
///
/// The set is closed on purpose: a code outside it converts to `None` and the
/// particle is rejected outright. Electrons and positrons are members so the
/// pt-floor and efficiency-bypass classes can name them, even though they
/// never pass physics qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    PiPlus,
    PiMinus,
    PiZero,
    KPlus,
    KMinus,
    KZeroShort,
    KZeroLong,
    Proton,
    AntiProton,
    Lambda,
    AntiLambda,
    Photon,
    Eta,
    Neutron,
    Electron,
    Positron,
    NuE,
    NuMu,
    NuTau,
    AntiNuE,
    AntiNuMu,
    AntiNuTau,
}

impl Species {
    /// Convert an external PDG code into a known species.
    ///
    /// Returns `None` for any code outside the closed set; callers treat that
    /// as an immediate rejection of the particle.
    pub fn from_id(id: ParticleID) -> Option<Self> {
        use Species::*;
        let species = match id.id() {
            211 => PiPlus,
            -211 => PiMinus,
            111 => PiZero,
            321 => KPlus,
            -321 => KMinus,
            310 => KZeroShort,
            130 => KZeroLong,
            2212 => Proton,
            -2212 => AntiProton,
            3122 => Lambda,
            -3122 => AntiLambda,
            22 => Photon,
            221 => Eta,
            2112 => Neutron,
            11 => Electron,
            -11 => Positron,
            12 => NuE,
            14 => NuMu,
            16 => NuTau,
            -12 => AntiNuE,
            -14 => AntiNuMu,
            -16 => AntiNuTau,
            _ => return None,
        };
        Some(species)
    }

    /// Whether the species is primary/stable enough to enter physics selection.
    ///
    /// Neutrons and neutrinos qualify here although no detector sees them;
    /// electrons and positrons do not qualify at all.
    pub fn qualifies(self) -> bool {
        use Species::*;
        matches!(
            self,
            PiPlus
                | PiMinus
                | PiZero
                | KPlus
                | KMinus
                | KZeroShort
                | KZeroLong
                | Proton
                | AntiProton
                | Lambda
                | AntiLambda
                | Photon
                | Eta
                | Neutron
                | NuE
                | NuMu
                | NuTau
                | AntiNuE
                | AntiNuMu
                | AntiNuTau
        )
    }

    /// Whether a detector can register the species at all.
    pub fn is_detectable(self) -> bool {
        use Species::*;
        matches!(
            self,
            PiPlus | PiMinus | KPlus | KMinus | Proton | AntiProton | Photon | Eta
        )
    }

    /// Electromagnetic-calorimeter class: takes the photon pt floor during
    /// selection and bypasses the efficiency trial during detection.
    pub fn uses_photon_floor(self) -> bool {
        use Species::*;
        matches!(self, Photon | Electron | Positron)
    }
}
