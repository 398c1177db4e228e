use std::fmt;

use rand::distributions::Distribution as Sample;
use rand::RngCore;
use serde_json::Value;
use statrs::distribution::{Beta as BetaBackend, Continuous, ContinuousCDF};
use statrs::statistics::Distribution as Moments;

use crate::dists::{json_field, Dist};
use crate::error::{Error, Result};

/// Beta distribution over `[lower, lower + width]`.
///
/// The backend works on the unit interval; inputs and outputs pass through
/// the affine transform `u = (x - lower) / width`.
#[derive(Debug, Clone)]
pub struct Beta {
    p: f64,
    q: f64,
    lower: f64,
    width: f64,
    backend: BetaBackend,
}

impl Beta {
    pub fn new(p: f64, q: f64, lower: f64, width: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(Error::invalid("beta support width must be positive"));
        }
        let backend = BetaBackend::new(p, q)?;
        Ok(Beta {
            p,
            q,
            lower,
            width,
            backend,
        })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "module": "beta",
            "p": self.p,
            "q": self.q,
            "lower": self.lower,
            "width": self.width,
        })
    }

    pub fn from_json(obj: &Value) -> Result<Self> {
        Beta::new(
            json_field(obj, "p")?,
            json_field(obj, "q")?,
            json_field(obj, "lower")?,
            json_field(obj, "width")?,
        )
    }
}

impl Dist for Beta {
    fn pdf(&self, x: f64) -> f64 {
        let u = (x - self.lower) / self.width;
        self.backend.pdf(u) / self.width
    }

    fn cdf(&self, x: f64) -> f64 {
        self.backend.cdf((x - self.lower) / self.width)
    }

    fn ppf(&self, p: f64) -> f64 {
        self.lower + self.width * self.backend.inverse_cdf(p)
    }

    fn mean(&self) -> f64 {
        self.lower + self.width * self.backend.mean().unwrap_or(f64::NAN)
    }

    fn var(&self) -> f64 {
        self.width * self.width * self.backend.variance().unwrap_or(f64::NAN)
    }

    fn rvs(&self, rng: &mut dyn RngCore, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| self.lower + self.width * Sample::sample(&self.backend, &mut *rng))
            .collect()
    }

    fn bounds(&self) -> [f64; 2] {
        [self.lower, self.lower + self.width]
    }
}

impl fmt::Display for Beta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "B({}, {}, {}, {})", self.p, self.q, self.lower, self.width)
    }
}
