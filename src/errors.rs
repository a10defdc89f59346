use thiserror::Error;

/// Errors surfaced by distribution construction and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Construction rejected the supplied parameters; the message carries
    /// the rejected values.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A probability handed to `icdf` fell outside `(0, 1]`.
    #[error("could not estimate icdf, p={0} is outside the safe estimation region")]
    OutOfRange(f64),
}
