use std::f64::consts::{PI, SQRT_2};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::distributions::ContinuousDistribution;
use crate::distributions::normal::acklam;
use crate::errors::DistributionError;
use crate::utils::math;

const DEFAULT_VARIANCE: f64 = 1.0;
fn default_variance() -> f64 {
    DEFAULT_VARIANCE
}

/// Raw `(mean, variance)` record for serialization. Missing fields fall back
/// to the standard normal; deserialization goes through [`Normal::new`] so
/// the variance invariant holds for values of any origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalParameters {
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_variance")]
    pub variance: f64,
}

/// Normal (Gaussian) distribution with location `mean` and dispersion
/// `variance`.
///
/// Immutable after construction; `variance > 0` is checked once in the
/// constructor and never re-validated. The standard deviation is derived on
/// demand, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NormalParameters", into = "NormalParameters")]
pub struct Normal {
    mean: f64,
    variance: f64,
}

impl Normal {
    /// Builds a normal distribution from its first two moments.
    pub fn new(mean: f64, variance: f64) -> Result<Self, DistributionError> {
        Self::with_moments(mean, variance, 0.0, 0.0)
    }

    /// Four-moment form. `skewness` and `kurtosis` are validated but not
    /// stored; they are reserved for a future generalized-normal variant and
    /// carry no computational effect here.
    pub fn with_moments(
        mean: f64,
        variance: f64,
        skewness: f64,
        kurtosis: f64,
    ) -> Result<Self, DistributionError> {
        Self::validate_parameters(mean, variance, skewness, kurtosis)?;
        Ok(Self { mean, variance })
    }

    /// The standard normal, `mean = 0`, `variance = 1`.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            variance: DEFAULT_VARIANCE,
        }
    }

    fn validate_parameters(
        mean: f64,
        variance: f64,
        skewness: f64,
        kurtosis: f64,
    ) -> Result<(), DistributionError> {
        if !(mean.is_finite() && variance.is_finite() && skewness.is_finite() && kurtosis.is_finite())
        {
            return Err(DistributionError::InvalidParameter(format!(
                "non-numeric parameter in normal distribution \
                 (mean={mean}, variance={variance}, skewness={skewness}, kurtosis={kurtosis})"
            )));
        }
        if variance <= 0.0 {
            return Err(DistributionError::InvalidParameter(format!(
                "variance must be strictly positive, got {variance}"
            )));
        }
        Ok(())
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn sd(&self) -> f64 {
        self.variance.sqrt()
    }

    /// One draw with ad-hoc parameters, no constructed value needed.
    pub fn draw<R: Rng + ?Sized>(mean: f64, variance: f64, rng: &mut R) -> f64 {
        box_muller(rng) * variance.sqrt() + mean
    }

    /// One independent draw from this distribution.
    pub fn rand<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Self::draw(self.mean, self.variance, rng)
    }

    /// Density at `x`.
    ///
    /// The z-score and the normalization both divide by the variance rather
    /// than the standard deviation. That is the defining formula of the
    /// original implementation, kept verbatim; for `variance != 1` it is not
    /// the textbook Gaussian density and does not integrate to 1.
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.variance;
        (-z * z / 2.0).exp() / (self.variance * PI.sqrt() * SQRT_2)
    }

    /// Cumulative probability `P(X <= x)`.
    pub fn cdf(&self, x: f64) -> f64 {
        math::std_normal_cdf((x - self.mean) / self.variance.sqrt())
    }

    /// Quantile for `p` in `(0, 1]`; `p == 1` yields `+∞`.
    pub fn icdf(&self, p: f64) -> Result<f64, DistributionError> {
        Ok(self.mean + self.sd() * acklam::std_normal_quantile(p)?)
    }
}

impl ContinuousDistribution for Normal {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn pdf(&self, x: f64) -> f64 {
        Normal::pdf(self, x)
    }

    fn cdf(&self, x: f64) -> f64 {
        Normal::cdf(self, x)
    }

    fn icdf(&self, p: f64) -> Result<f64, DistributionError> {
        Normal::icdf(self, p)
    }

    fn rand(&self, rng: &mut dyn RngCore) -> f64 {
        Normal::draw(self.mean, self.variance, rng)
    }
}

impl TryFrom<NormalParameters> for Normal {
    type Error = DistributionError;

    fn try_from(params: NormalParameters) -> Result<Self, Self::Error> {
        Normal::new(params.mean, params.variance)
    }
}

impl From<Normal> for NormalParameters {
    fn from(normal: Normal) -> Self {
        NormalParameters {
            mean: normal.mean,
            variance: normal.variance,
        }
    }
}

/// Box-Muller transform: two uniforms into one standard-normal variate.
fn box_muller<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // random::<f64>() covers [0, 1); flipping it puts u in (0, 1] so the
    // logarithm never sees zero.
    let u = 1.0 - rng.random::<f64>();
    let v: f64 = rng.random();
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}
