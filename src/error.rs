//! Error type shared by every fallible operation in the crate.

/// Errors returned by fitting, conversion and root finding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RkError {
    /// No observations were supplied.
    #[error("No data points to fit.")]
    NoData,

    /// `x` and `y` do not have the same number of observations.
    #[error("Sample length mismatch: x has {x} values, y has {y}.")]
    LengthMismatch { x: usize, y: usize },

    /// An observation is NaN or infinite.
    #[error("Non-finite observation at index {index}: x = {x}, y = {y}.")]
    NonFiniteData { index: usize, x: f64, y: f64 },

    /// A Redlich-Kister expansion needs at least one coefficient.
    #[error("Invalid Redlich-Kister order {0}: at least one coefficient is required.")]
    InvalidOrder(usize),

    /// Any other out-of-range setting.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The design matrix does not have full column rank.
    #[error(
        "Least-squares system is singular; the data may be insufficient or collinear. [n: {n}, k: {k}]"
    )]
    SingularSystem { n: usize, k: usize },

    /// The simplex optimizer failed internally (not a convergence failure).
    #[error("Optimizer failed: {0}")]
    Optimizer(String),

    /// The companion-matrix eigenvalue iteration did not converge.
    #[error("Polynomial root finding did not converge.")]
    RootFinding,

    /// Order selection produced no admissible fit.
    #[error("None of the tested orders produced a valid fit.")]
    NoModel,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = RkError::LengthMismatch { x: 3, y: 4 };
        assert_eq!(err.to_string(), "Sample length mismatch: x has 3 values, y has 4.");

        let err = RkError::NonFiniteData { index: 1, x: 0.3, y: f64::NAN };
        assert_eq!(err.to_string(), "Non-finite observation at index 1: x = 0.3, y = NaN.");

        let err = RkError::SingularSystem { n: 2, k: 5 };
        assert!(err.to_string().contains("[n: 2, k: 5]"));
    }
}
