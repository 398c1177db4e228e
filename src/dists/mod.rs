//! Probability distributions over one-dimensional parameter domains.
//!
//! The numeric heavy lifting is delegated to `statrs`; the types here add
//! the domain transform, an explicit JSON form, and a common object-safe
//! capability set.

use rand::RngCore;
use serde_json::Value;

use crate::error::{Error, Result};

mod beta;
mod normal;
mod uniform;

pub use self::beta::Beta;
pub use self::normal::Normal;
pub use self::uniform::Uniform;

/// Capability set shared by all distributions.
pub trait Dist {
    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function; inverse of `cdf`.
    fn ppf(&self, p: f64) -> f64;

    fn mean(&self) -> f64;

    fn var(&self) -> f64;

    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Draw `n` samples.
    fn rvs(&self, rng: &mut dyn RngCore, n: usize) -> Vec<f64>;

    /// Lower and upper end of the support.
    fn bounds(&self) -> [f64; 2];

    /// Number of dimensions; all distributions here are univariate.
    fn dim(&self) -> usize {
        1
    }
}

/// Restore a distribution from its tagged JSON form.
pub fn from_json(obj: &Value) -> Result<Box<dyn Dist>> {
    match obj["module"].as_str() {
        Some("beta") => Ok(Box::new(Beta::from_json(obj)?)),
        Some("uniform") => Ok(Box::new(Uniform::from_json(obj)?)),
        Some("normal") => Ok(Box::new(Normal::from_json(obj)?)),
        Some(other) => Err(Error::invalid(format!(
            "unknown distribution module '{}'",
            other
        ))),
        None => Err(Error::invalid("distribution json carries no module tag")),
    }
}

pub(crate) fn json_field(obj: &Value, key: &str) -> Result<f64> {
    obj[key]
        .as_f64()
        .ok_or_else(|| Error::invalid(format!("missing or non-numeric field '{}'", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_restores_each_module() {
        let beta = Beta::new(2.0, 3.0, 0.0, 1.0).unwrap();
        let restored = from_json(&beta.to_json()).unwrap();
        assert!((restored.mean() - beta.mean()).abs() < 1e-12);

        let uniform = Uniform::new(-1.0, 1.0).unwrap();
        let restored = from_json(&uniform.to_json()).unwrap();
        assert_eq!(restored.bounds(), [-1.0, 1.0]);

        let normal = Normal::new(0.5, 2.0).unwrap();
        let restored = from_json(&normal.to_json()).unwrap();
        assert!((restored.std() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn dispatcher_rejects_unknown_tags() {
        assert!(from_json(&json!({"module": "cauchy"})).is_err());
        assert!(from_json(&json!({"p": 1.0})).is_err());
    }
}
