//! jetcull: particle selection, detector-efficiency culling and jet
//! clustering for simulated collision events.
//!
//! The crate takes one event's raw particle records (PDG code,
//! four-momentum, production vertex), keeps the physically plausible and
//! detector-visible ones, optionally applies a stochastic per-particle
//! detection model, and clusters the survivors into jets:
//!
//! ```
//! use jetcull::core::{
//!     four_momenta, ClusterConfig, CutConfig, DetectionFilter, JetClusterer,
//!     ParticleRecord, ParticleSelector,
//! };
//! use particle_id::ParticleID;
//!
//! # fn main() -> jetcull::error::Result<()> {
//! let records = vec![
//!     ParticleRecord::new(ParticleID::new(211), 6.0, 0.0, 0.0, 6.01, [0.0; 3]),
//!     ParticleRecord::new(ParticleID::new(22), 0.4, 0.1, 0.0, 0.42, [0.0; 3]),
//! ];
//!
//! let selector = ParticleSelector::new(CutConfig::default());
//! let selection = selector.select(&records);
//!
//! let mut filter = DetectionFilter::new(jetcull::core::time_seed(0)?)?;
//! let culled = filter.cull(&selection.detectable);
//!
//! let mut clusterer = JetClusterer::new(ClusterConfig::default());
//! let jets = clusterer.cluster(four_momenta(&culled))?;
//! # let _ = jets;
//! # Ok(())
//! # }
//! ```
//!
//! Event generation stays outside the crate behind the
//! [`core::EventSource`] trait; jet finding is delegated to the `jetty`
//! engine. All configuration is validated at construction; see
//! [`error::Error`].

pub mod core;
pub mod error;

pub use crate::core::{
    ClusterConfig, CutConfig, DetectionFilter, JetClusterer, ParticleRecord, ParticleSelector,
    Selection, Species,
};
pub use crate::error::{Error, Result};
