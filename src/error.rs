use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the analysis core.
///
/// Configuration is validated when a component is constructed; the pipeline
/// never runs with an invalid configuration. Per-particle rejection during
/// selection is ordinary filtering and is not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Numerical issue (e.g., non-finite four-momentum offered for clustering).
    #[error("numerical error: {0}")]
    MathError(String),

    /// The system clock could not produce a time-derived seed.
    #[error(transparent)]
    Clock(#[from] std::time::SystemTimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("jet radius must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("jet radius"));
    }

    #[test]
    fn result_type_alias_compiles() -> Result<()> {
        Ok(())
    }
}
