/// Detector-efficiency model: probability that a particle of the given
/// transverse momentum is registered.
///
/// Implemented by the built-in [`DefaultEfficiency`] curve and, via the
/// blanket impl, by any `Fn(f64) -> f64` closure, so a custom
/// parametrization can be swapped in at filter construction time.
pub trait Efficiency {
    /// Detection probability for transverse momentum `pt` (GeV).
    fn eval(&self, pt: f64) -> f64;
}

impl<F> Efficiency for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, pt: f64) -> f64 {
        self(pt)
    }
}

/// The built-in single-particle efficiency curve,
/// `(7/9) * 2.26545 * exp(-(0.999977 / pt)^0.0785488)`.
///
/// The parametrization is valid on pt in ([`Self::PT_MIN`], [`Self::PT_MAX`])
/// GeV. Evaluating outside that window extrapolates the fit; staying inside
/// it is a caller contract, not a runtime check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEfficiency;

impl DefaultEfficiency {
    /// Lower edge of the fit's validity window (GeV).
    pub const PT_MIN: f64 = 0.3;
    /// Upper edge of the fit's validity window (GeV).
    pub const PT_MAX: f64 = 80.0;
}

impl Efficiency for DefaultEfficiency {
    #[inline]
    fn eval(&self, pt: f64) -> f64 {
        (7.0 / 9.0) * 2.26545 * f64::exp(-f64::powf(0.999977 / pt, 0.0785488))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_curve_is_a_probability_on_its_domain() {
        let eff = DefaultEfficiency;
        let mut pt = DefaultEfficiency::PT_MIN;
        while pt <= DefaultEfficiency::PT_MAX {
            let p = eff.eval(pt);
            assert!((0.0..=1.0).contains(&p), "eff({pt}) = {p} not a probability");
            pt += 0.1;
        }
    }

    #[test]
    fn default_curve_rises_with_pt() {
        let eff = DefaultEfficiency;
        assert!(eff.eval(1.0) < eff.eval(10.0));
        assert!(eff.eval(10.0) < eff.eval(80.0));
    }

    #[test]
    fn default_curve_reference_value() {
        // at pt = 1 GeV the exponent is (0.999977)^0.0785488 ~= 1, so the
        // curve is close to (7/9) * 2.26545 / e
        let expected = (7.0 / 9.0) * 2.26545 * (-1.0f64).exp();
        let got = DefaultEfficiency.eval(1.0);
        assert!((got - expected).abs() < 1e-5, "got {got}, expected ~{expected}");
    }

    #[test]
    fn closures_implement_the_trait() {
        let flat = |_pt: f64| 0.5;
        assert_eq!(flat.eval(3.0), 0.5);
        let scaled = |pt: f64| (pt / 100.0).min(1.0);
        assert_eq!(scaled.eval(50.0), 0.5);
    }
}
