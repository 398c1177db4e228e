//! Cross-validation driver: runs a modelling flow over the folds of a
//! folding policy and scores it on the held-out rows.

use crate::dataset::DataContainer;
use crate::error::{Error, Result};
use crate::folding::FoldingPolicy;
use crate::measure::MeasureAccumulator;

/// Runs a training/prediction flow once per fold and accumulates a
/// performance measure over all validation rows.
pub struct CrossValidation<'a> {
    data: &'a DataContainer,
    policy: Box<dyn FoldingPolicy>,
}

impl<'a> CrossValidation<'a> {
    /// Every row index referenced by the policy must lie inside `data`.
    pub fn new(data: &'a DataContainer, policy: Box<dyn FoldingPolicy>) -> Result<Self> {
        for fold in policy.iter() {
            for &i in fold.trainset.iter().chain(fold.testset.iter()) {
                if i >= data.size() {
                    return Err(Error::invalid(format!(
                        "fold references row {} but the dataset has {} rows",
                        i,
                        data.size()
                    )));
                }
            }
        }
        Ok(CrossValidation { data, policy })
    }

    pub fn num_folds(&self) -> usize {
        self.policy.num_folds()
    }

    /// For each fold, `flow` receives the training rows and the validation
    /// points, and must return one prediction per validation point.
    pub fn run<F, M>(&self, flow: F) -> M
    where
        F: Fn(
            &mut dyn Iterator<Item = (&[f64], f64)>,
            &mut dyn Iterator<Item = &[f64]>,
        ) -> Box<dyn Iterator<Item = f64>>,
        M: MeasureAccumulator<f64>,
    {
        let mut measure = M::new();

        for (k, fold) in self.policy.iter().enumerate() {
            debug!(
                "fold {}: {} training rows, {} validation rows",
                k,
                fold.trainset.len(),
                fold.testset.len()
            );

            let mut train = fold
                .trainset
                .iter()
                .map(|&i| (self.data.point(i), self.data.value(i)));

            let mut test = fold.testset.iter().map(|&i| self.data.point(i));

            let predictit = flow(&mut train, &mut test);

            for (known, pred) in fold.testset.iter().map(|&i| self.data.value(i)).zip(predictit) {
                measure.update_one(&known, &pred);
            }
        }

        measure
    }
}
