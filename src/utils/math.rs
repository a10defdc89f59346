/// Standard mathematical error function, delegated to the platform-quality
/// `libm` implementation.
#[inline]
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// `P(Z <= z)` for the standard normal variable `Z`.
pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / (2.0f64).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_around_zero() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() <= 1e-12);
        for z in [0.5, 1.0, 2.5] {
            let p = std_normal_cdf(z) + std_normal_cdf(-z);
            assert!((p - 1.0).abs() <= 1e-12);
        }
    }

    #[test]
    fn known_values() {
        assert!((std_normal_cdf(1.959963984540054) - 0.975).abs() <= 1e-9);
        assert!((std_normal_cdf(-1.0) - 0.15865525393145707).abs() <= 1e-9);
    }
}
