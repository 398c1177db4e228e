use std::fmt;

use rand::distributions::Distribution as Sample;
use rand::RngCore;
use serde_json::Value;
use statrs::distribution::{Continuous, ContinuousCDF, Normal as NormalBackend};
use statrs::statistics::Distribution as Moments;

use crate::dists::{json_field, Dist};
use crate::error::Result;

/// Normal distribution with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone)]
pub struct Normal {
    mu: f64,
    sigma: f64,
    backend: NormalBackend,
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let backend = NormalBackend::new(mu, sigma)?;
        Ok(Normal { mu, sigma, backend })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "module": "normal",
            "mu": self.mu,
            "sigma": self.sigma,
        })
    }

    pub fn from_json(obj: &Value) -> Result<Self> {
        Normal::new(json_field(obj, "mu")?, json_field(obj, "sigma")?)
    }
}

impl Dist for Normal {
    fn pdf(&self, x: f64) -> f64 {
        self.backend.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.backend.cdf(x)
    }

    fn ppf(&self, p: f64) -> f64 {
        self.backend.inverse_cdf(p)
    }

    fn mean(&self) -> f64 {
        self.backend.mean().unwrap_or(f64::NAN)
    }

    fn var(&self) -> f64 {
        self.backend.variance().unwrap_or(f64::NAN)
    }

    fn rvs(&self, rng: &mut dyn RngCore, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| Sample::sample(&self.backend, &mut *rng))
            .collect()
    }

    fn bounds(&self) -> [f64; 2] {
        [f64::NEG_INFINITY, f64::INFINITY]
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "N({}, {})", self.mu, self.sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moments_and_symmetry() {
        let n = Normal::new(1.0, 2.0).unwrap();
        assert!((n.mean() - 1.0).abs() < 1e-12);
        assert!((n.var() - 4.0).abs() < 1e-12);
        assert!((n.std() - 2.0).abs() < 1e-12);
        assert!((n.cdf(1.0) - 0.5).abs() < 1e-12);
        assert!((n.ppf(0.5) - 1.0).abs() < 1e-9);

        let peak = 1.0 / (2.0 * (2.0 * std::f64::consts::PI).sqrt());
        assert!((n.pdf(1.0) - peak).abs() < 1e-12);
    }

    #[test]
    fn unbounded_support() {
        let n = Normal::new(0.0, 1.0).unwrap();
        assert_eq!(n.bounds(), [f64::NEG_INFINITY, f64::INFINITY]);
    }

    #[test]
    fn json_round_trip() {
        let n = Normal::new(-0.5, 0.25).unwrap();
        let restored = Normal::from_json(&n.to_json()).unwrap();
        assert!((restored.mean() + 0.5).abs() < 1e-12);
        assert!((restored.std() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn invalid_deviation_is_rejected() {
        assert!(Normal::new(0.0, -1.0).is_err());
    }
}
