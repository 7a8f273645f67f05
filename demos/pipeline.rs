// full analysis chain over a canned event
// run with `cargo run --example pipeline`
// set the environment variable `RUST_LOG=debug` for per-stage output
use jetcull::core::{
    four_momenta, time_seed, ClusterConfig, CutConfig, DetectionFilter, EventSource,
    JetClusterer, ParticleRecord, ParticleSelector,
};
use jetcull::error::Result;
use particle_id::ParticleID;

/// Stand-in for an external generator: a single hand-built minimum-bias-ish
/// event, replayed on every call.
struct CannedSource;

impl EventSource for CannedSource {
    fn generate(&mut self) -> Result<Vec<ParticleRecord>> {
        let p = |code: i32, px: f64, py: f64, pz: f64, e: f64| {
            ParticleRecord::new(ParticleID::new(code), px, py, pz, e, [0.0; 3])
        };
        Ok(vec![
            p(211, 6.0, 0.2, 0.1, 6.01),
            p(-211, 3.5, -0.1, 0.0, 3.51),
            p(22, 2.0, 0.3, -0.1, 2.03),
            p(2112, 1.5, 0.1, 0.0, 1.78),
            p(321, -4.0, -0.3, 0.2, 4.05),
            p(-321, -2.5, 0.2, -0.1, 2.56),
            p(13, 1.0, 1.0, 0.0, 1.42),
            p(211, 0.1, 0.05, 0.0, 0.18),
        ])
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut source = CannedSource;
    let records = source.generate()?;
    println!("generated {} particles", records.len());

    let selector = ParticleSelector::new(CutConfig::new(2.0, 0.15, 0.3, 100.0)?);
    let selection = selector.select(&records);
    println!(
        "selected {} particles, {} detectable",
        selection.all.len(),
        selection.detectable.len()
    );

    let mut filter = DetectionFilter::new(time_seed(0)?)?;
    let culled = filter.cull(&selection.detectable);
    println!("{} particles after the detection trial", culled.len());

    let mut clusterer = JetClusterer::new(ClusterConfig::new(
        jetcull::core::JetAlgorithm::AntiKt,
        jetcull::core::RecombinationScheme::EScheme,
        jetcull::core::Strategy::Best,
        5.0,
        10_000.0,
        2.0,
        0.4,
    )?);

    println!("{:>5} {:>12} {:>12} {:>12}", "jet", "pt", "eta", "phi");
    let jets = clusterer.cluster(four_momenta(&selection.all))?;
    for (i, jet) in jets.iter().enumerate() {
        let (px, py, pz) = (jet.px().raw(), jet.py().raw(), jet.pz().raw());
        let pt = jet.pt().raw();
        let p = (px * px + py * py + pz * pz).sqrt();
        let eta = 0.5 * ((p + pz) / (p - pz)).ln();
        let phi = std::f64::consts::PI + f64::atan2(-py, -px);
        println!("{i:>5} {pt:>12.6} {eta:>12.6} {phi:>12.6}");
    }
    Ok(())
}
