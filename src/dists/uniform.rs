use std::fmt;

use rand::distributions::Distribution as Sample;
use rand::RngCore;
use serde_json::Value;
use statrs::distribution::{Continuous, ContinuousCDF, Uniform as UniformBackend};
use statrs::statistics::Distribution as Moments;

use crate::dists::{json_field, Dist};
use crate::error::{Error, Result};

/// Uniform distribution over `[a, b]`.
#[derive(Debug, Clone)]
pub struct Uniform {
    a: f64,
    b: f64,
    backend: UniformBackend,
}

impl Uniform {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !(a < b) {
            return Err(Error::invalid("uniform bounds must satisfy a < b"));
        }
        let backend = UniformBackend::new(a, b)?;
        Ok(Uniform { a, b, backend })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "module": "uniform",
            "a": self.a,
            "b": self.b,
        })
    }

    pub fn from_json(obj: &Value) -> Result<Self> {
        Uniform::new(json_field(obj, "a")?, json_field(obj, "b")?)
    }
}

impl Dist for Uniform {
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
        [self.a, self.b]
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "U({}, {})", self.a, self.b)
    }
}
