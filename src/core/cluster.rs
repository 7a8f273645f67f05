use jetty::{anti_kt_f, cambridge_aachen_f, kt_f, Cluster, PseudoJet};
use log::debug;
use noisy_float::prelude::*;

use crate::error::{Error, Result};

/// Default minimum jet transverse momentum (GeV).
pub const DEFAULT_MIN_JET_PT: f64 = 5.0;
/// Default maximum jet transverse momentum (GeV).
pub const DEFAULT_MAX_JET_PT: f64 = 10_000.0;
/// Default jet radius parameter.
pub const DEFAULT_JET_RADIUS: f64 = 0.2;
/// Default maximum jet |pseudorapidity|, before the inward radius adjustment.
pub const DEFAULT_MAX_JET_ETA: f64 = 0.7;

/// Jet clustering algorithms understood by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JetAlgorithm {
    /// The anti-kt algorithm.
    #[default]
    AntiKt,
    /// The kt algorithm.
    Kt,
    /// The Cambridge/Aachen algorithm.
    CambridgeAachen,
}

/// How constituent four-momenta are combined into a jet.
///
/// The jetty backend recombines by four-momentum addition; configurations
/// requesting any other scheme are rejected at construction rather than
/// clustered differently than asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RecombinationScheme {
    /// Four-momentum addition.
    #[default]
    EScheme,
    /// pt-weighted recombination of boost-invariant quantities.
    BIPtScheme,
}

/// Clustering strategy hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Let the backend pick; resolves to its N^2 implementation.
    #[default]
    Best,
    /// Plain N^2 pairwise clustering.
    N2Plain,
}

/// Immutable jet-clustering configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    /// Clustering algorithm.
    pub algorithm: JetAlgorithm,
    /// Recombination scheme.
    pub scheme: RecombinationScheme,
    /// Strategy hint.
    pub strategy: Strategy,
    /// Minimum jet pt (GeV).
    pub min_pt: f64,
    /// Maximum jet pt (GeV).
    pub max_pt: f64,
    /// Maximum jet |pseudorapidity|.
    pub max_eta: f64,
    /// Jet radius parameter.
    pub radius: f64,
}

impl ClusterConfig {
    /// Create a configuration after validating invariants.
    ///
    /// `max_eta` is used as given; only [`ClusterConfig::default`] pulls the
    /// eta window inward by the jet radius.
    ///
    /// Errors:
    /// - `Error::InvalidParam` for a non-positive or non-finite radius, a
    ///   negative or inverted pt window, a negative eta bound, or a
    ///   recombination scheme the backend cannot honor.
    pub fn new(
        algorithm: JetAlgorithm,
        scheme: RecombinationScheme,
        strategy: Strategy,
        min_pt: f64,
        max_pt: f64,
        max_eta: f64,
        radius: f64,
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "jet radius must be finite and > 0, got {radius}"
            )));
        }
        if !min_pt.is_finite() || min_pt < 0.0 {
            return Err(Error::InvalidParam(format!(
                "min jet pt must be finite and >= 0, got {min_pt}"
            )));
        }
        if !max_pt.is_finite() || max_pt < min_pt {
            return Err(Error::InvalidParam(format!(
                "max jet pt must be finite and >= min jet pt, got {max_pt}"
            )));
        }
        if !max_eta.is_finite() || max_eta < 0.0 {
            return Err(Error::InvalidParam(format!(
                "max jet eta must be finite and >= 0, got {max_eta}"
            )));
        }
        if scheme != RecombinationScheme::EScheme {
            return Err(Error::InvalidParam(format!(
                "recombination scheme {scheme:?} is not supported by the clustering backend"
            )));
        }
        Ok(Self {
            algorithm,
            scheme,
            strategy,
            min_pt,
            max_pt,
            max_eta,
            radius,
        })
    }
}

impl Default for ClusterConfig {
    /// The default configuration: anti-kt, R = 0.2, pt in [5, 10000] GeV,
    /// with the eta window pulled inward by the radius so that default jets
    /// lie fully inside the particle acceptance.
    fn default() -> Self {
        Self {
            algorithm: JetAlgorithm::AntiKt,
            scheme: RecombinationScheme::EScheme,
            strategy: Strategy::Best,
            min_pt: DEFAULT_MIN_JET_PT,
            max_pt: DEFAULT_MAX_JET_PT,
            max_eta: DEFAULT_MAX_JET_ETA - DEFAULT_JET_RADIUS,
            radius: DEFAULT_JET_RADIUS,
        }
    }
}

/// Combined eta-range and pt-range jet acceptance, built once per
/// configuration.
#[derive(Debug, Clone, Copy)]
struct JetWindow {
    eta_max: f64,
    pt_min: f64,
    pt_max: f64,
}

impl JetWindow {
    fn new(config: &ClusterConfig) -> Self {
        Self {
            eta_max: config.max_eta,
            pt_min: config.min_pt,
            pt_max: config.max_pt,
        }
    }

    fn accepts(&self, jet: &PseudoJet) -> bool {
        let Some(eta) = pseudorapidity(jet) else {
            return false;
        };
        let pt = jet.pt().raw();
        eta.abs() <= self.eta_max && pt >= self.pt_min && pt <= self.pt_max
    }
}

/// Pseudorapidity of a clustered jet, `None` for a purely longitudinal one.
fn pseudorapidity(jet: &PseudoJet) -> Option<f64> {
    let px = jet.px().raw();
    let py = jet.py().raw();
    let pz = jet.pz().raw();
    let pt2 = px * px + py * py;
    if pt2 <= 0.0 {
        return None;
    }
    let p = (pt2 + pz * pz).sqrt();
    Some(0.5 * ((p + pz) / (p - pz)).ln())
}

/// State of one clustering pass. The clusterer owns at most one; it is
/// dropped before the next pass begins, so returned jets cannot outlive it.
#[derive(Debug)]
struct ClusterSession {
    jets: Vec<PseudoJet>,
}

/// Drives the jetty clustering engine with a fixed configuration.
///
/// `cluster` borrows the result out of the clusterer, which makes holding
/// jets across a subsequent call a compile error; the prior session is
/// released each time.
#[derive(Debug)]
pub struct JetClusterer {
    config: ClusterConfig,
    window: JetWindow,
    session: Option<ClusterSession>,
}

impl JetClusterer {
    /// Create a clusterer from a validated configuration.
    pub fn new(config: ClusterConfig) -> Self {
        Self {
            config,
            window: JetWindow::new(&config),
            session: None,
        }
    }

    /// The configuration this clusterer runs with.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Cluster a four-momentum collection into jets.
    ///
    /// Inclusive jets are pre-filtered by the minimum jet pt, sorted by
    /// descending pt, then passed through the eta/pt window. The returned
    /// slice lives until the next `cluster` call on this instance.
    ///
    /// Errors:
    /// - `Error::MathError` if any input four-momentum is non-finite.
    pub fn cluster(&mut self, inputs: Vec<PseudoJet>) -> Result<&[PseudoJet]> {
        // Release the prior session before the engine runs.
        self.session = None;

        for (i, p) in inputs.iter().enumerate() {
            let components = [p.e().raw(), p.px().raw(), p.py().raw(), p.pz().raw()];
            if components.iter().any(|c| !c.is_finite()) {
                return Err(Error::MathError(format!(
                    "non-finite four-momentum at input index {i}: {components:?}"
                )));
            }
        }

        let n_inputs = inputs.len();
        let r = self.config.radius;
        let min_pt2 = n64(self.config.min_pt * self.config.min_pt);
        let cut = |jet: PseudoJet| jet.pt2() > min_pt2;
        let mut jets = match self.config.algorithm {
            JetAlgorithm::AntiKt => inputs.cluster_if(anti_kt_f(r), cut),
            JetAlgorithm::Kt => inputs.cluster_if(kt_f(r), cut),
            JetAlgorithm::CambridgeAachen => inputs.cluster_if(cambridge_aachen_f(r), cut),
        };
        jets.sort_unstable_by(|a, b| b.pt2().cmp(&a.pt2()));
        let window = self.window;
        jets.retain(|jet| window.accepts(jet));
        debug!("clustered {} inputs into {} accepted jets", n_inputs, jets.len());

        let session = self.session.insert(ClusterSession { jets });
        Ok(&session.jets)
    }
}
