//! Core analysis stages: species classification, particle selection,
//! stochastic detection, and jet clustering.
//!
//! The stages compose per event: raw records go through the
//! [`select::ParticleSelector`], the detectable subset through the
//! [`detect::DetectionFilter`], and either collection into the
//! [`cluster::JetClusterer`].

pub mod cluster;
pub mod detect;
pub mod efficiency;
pub mod record;
pub mod select;
pub mod source;
pub mod species;

pub use cluster::{ClusterConfig, JetAlgorithm, JetClusterer, RecombinationScheme, Strategy};
pub use detect::DetectionFilter;
pub use efficiency::{DefaultEfficiency, Efficiency};
pub use record::ParticleRecord;
pub use select::{four_momenta, CutConfig, ParticleSelector, SelectedParticle, Selection};
pub use source::{time_seed, EventSource};
pub use species::Species;
