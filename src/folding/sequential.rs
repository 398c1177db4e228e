use crate::error::Result;
use crate::folding::{folds_from_permutation, Fold, FoldingPolicy};

/// Sequential folding: validation windows slide over the rows in their
/// original order.
#[derive(Debug)]
pub struct SequentialFolding {
    folds: Vec<Fold>,
}

impl SequentialFolding {
    pub fn new(size: usize, level: usize) -> Result<Self> {
        let seq: Vec<usize> = (0..size).collect();
        let folds = folds_from_permutation(&seq, level)?;
        debug!("sequential folding: {} rows, {} folds", size, level);
        Ok(SequentialFolding { folds })
    }
}

impl FoldingPolicy for SequentialFolding {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a> {
        Box::new(self.folds.iter())
    }

    fn num_folds(&self) -> usize {
        self.folds.len()
    }
}
