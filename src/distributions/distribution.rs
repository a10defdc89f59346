use rand::RngCore;

use crate::errors::DistributionError;

/// Continuous univariate distribution.
///
/// Implementations are immutable once constructed and expose their first two
/// moments plus the density, cumulative and quantile functions. Sampling
/// draws from an injected uniform source so callers control seeding.
pub trait ContinuousDistribution {
    /// Location parameter μ.
    fn mean(&self) -> f64;

    /// Dispersion parameter σ², strictly positive.
    fn variance(&self) -> f64;

    /// Standard deviation, `variance().sqrt()`.
    fn sd(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Density at `x`. Defined for all real `x`, never negative.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative probability `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function, the inverse of [`cdf`](Self::cdf).
    ///
    /// Defined on `(0, 1]`; `p == 1` maps to `+∞`, anything outside the
    /// interval is [`DistributionError::OutOfRange`].
    fn icdf(&self, p: f64) -> Result<f64, DistributionError>;

    /// One independent draw from the distribution.
    fn rand(&self, rng: &mut dyn RngCore) -> f64;
}
