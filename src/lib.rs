//! Dataset containers, cross-validation folding policies, and probability
//! distributions for grid-based learners.
//!
//! The crate provides the data-handling layer around a numeric learner:
//! loading aligned (point, value) rows, partitioning them into
//! training/validation folds, running a modelling flow once per fold, and
//! describing parameter uncertainty through a small set of distributions.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

pub mod baseline;
pub mod dists;

mod dataset;
mod error;
mod folding;
mod measure;
mod validation;

pub use crate::dataset::{DataContainer, DataEntry, DataSpecification};
pub use crate::error::{Error, Result};
pub use crate::folding::{
    validation_windows, Fold, FoldingPolicy, FrozenFolding, RandomFolding, SequentialFolding,
};
pub use crate::measure::{
    MeanSquaredError, MeasureAccumulator, PredictiveAccuracy, RootMeanSquaredError,
};
pub use crate::validation::CrossValidation;
