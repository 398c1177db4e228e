//! Folding policies: partition a dataset into cross-validation folds.

use std::ops::Range;

use crate::error::{Error, Result};

mod frozen;
mod random;
mod sequential;

pub use self::frozen::FrozenFolding;
pub use self::random::RandomFolding;
pub use self::sequential::SequentialFolding;

/// A single cross-validation fold: the row indices used for training and
/// the row indices held out for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    pub trainset: Vec<usize>,
    pub testset: Vec<usize>,
}

impl Fold {
    pub fn new() -> Self {
        Fold {
            trainset: Vec::new(),
            testset: Vec::new(),
        }
    }
}

/// Folding policies expose an ordered sequence of folds.
pub trait FoldingPolicy {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a>;

    fn num_folds(&self) -> usize;
}

/// Compute the validation index windows for `level` folds over `size` rows.
///
/// The window length is `size / level` with integer truncation, and the
/// last window is clipped to `size`. Rows at `level * (size / level)` and
/// beyond therefore never appear in any validation window; they stay in
/// every training set.
pub fn validation_windows(size: usize, level: usize) -> Result<Vec<Range<usize>>> {
    if size < 1 {
        return Err(Error::invalid("dataset size must be at least 1"));
    }
    if level < 1 {
        return Err(Error::invalid("fold level must be at least 1"));
    }
    if level > size {
        return Err(Error::invalid(format!(
            "cannot split {} rows into {} folds",
            size, level
        )));
    }

    let window = size / level;
    Ok((0..level)
        .map(|step| step * window..((step + 1) * window).min(size))
        .collect())
}

/// Assemble folds from a row permutation: validation rows are taken from
/// the window slice of `seq`, training rows are the ascending complement.
pub(crate) fn folds_from_permutation(seq: &[usize], level: usize) -> Result<Vec<Fold>> {
    let size = seq.len();
    let windows = validation_windows(size, level)?;

    let mut folds = Vec::with_capacity(level);
    for win in windows {
        let testset: Vec<usize> = seq[win].to_vec();

        let mut held_out = vec![false; size];
        for &i in &testset {
            held_out[i] = true;
        }
        let trainset: Vec<usize> = (0..size).filter(|&i| !held_out[i]).collect();

        folds.push(Fold { trainset, testset });
    }
    Ok(folds)
}
