use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::folding::{folds_from_permutation, Fold, FoldingPolicy};

/// Random folding: validation windows slide over a shuffled permutation of
/// the rows. Training indices are still materialized in dataset order.
#[derive(Debug)]
pub struct RandomFolding {
    folds: Vec<Fold>,
}

impl RandomFolding {
    pub fn new(size: usize, level: usize) -> Result<Self> {
        Self::with_rng(size, level, &mut rand::thread_rng())
    }

    /// Identical seeds yield identical folds.
    pub fn with_seed(size: usize, level: usize, seed: u64) -> Result<Self> {
        Self::with_rng(size, level, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: Rng>(size: usize, level: usize, rng: &mut R) -> Result<Self> {
        let mut seq: Vec<usize> = (0..size).collect();
        seq.shuffle(rng);
        let folds = folds_from_permutation(&seq, level)?;
        debug!("random folding: {} rows, {} folds", size, level);
        Ok(RandomFolding { folds })
    }
}

impl FoldingPolicy for RandomFolding {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a> {
        Box::new(self.folds.iter())
    }

    fn num_folds(&self) -> usize {
        self.folds.len()
    }
}
