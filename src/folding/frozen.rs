use crate::error::{Error, Result};
use crate::folding::{Fold, FoldingPolicy};

/// Role of a row within one fold of a predefined split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) enum SplitRole {
    #[serde(rename = "TRAIN")]
    Train,

    #[serde(rename = "TEST")]
    Test,
}

/// One row assignment of a predefined split.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SplitItem {
    #[serde(rename = "type")]
    pub purpose: SplitRole,

    pub rowid: usize,

    pub fold: usize,
}

/// Folds fixed up front instead of computed from the dataset size.
#[derive(Debug)]
pub struct FrozenFolding {
    folds: Vec<Fold>,
}

impl FrozenFolding {
    pub fn new(folds: Vec<Fold>) -> Self {
        FrozenFolding { folds }
    }

    /// Load a split list of the form
    /// `[{"type": "TRAIN", "rowid": 0, "fold": 0}, ..]`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let items: Vec<SplitItem> = serde_json::from_str(input)?;
        if items.is_empty() {
            return Err(Error::invalid("predefined split contains no rows"));
        }

        let mut folds: Vec<Fold> = Vec::new();
        for item in items {
            if item.fold >= folds.len() {
                folds.resize(item.fold + 1, Fold::new());
            }
            let fold = &mut folds[item.fold];

            match item.purpose {
                SplitRole::Train => fold.trainset.push(item.rowid),
                SplitRole::Test => fold.testset.push(item.rowid),
            }
        }

        Ok(FrozenFolding { folds })
    }
}

impl FoldingPolicy for FrozenFolding {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a> {
        Box::new(self.folds.iter())
    }

    fn num_folds(&self) -> usize {
        self.folds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_are_grouped_by_fold() {
        let input = r#"[
            {"type": "TRAIN", "rowid": 0, "fold": 0},
            {"type": "TRAIN", "rowid": 1, "fold": 0},
            {"type": "TEST",  "rowid": 2, "fold": 0},
            {"type": "TEST",  "rowid": 0, "fold": 1},
            {"type": "TRAIN", "rowid": 1, "fold": 1},
            {"type": "TRAIN", "rowid": 2, "fold": 1}
        ]"#;
        let policy = FrozenFolding::from_json_str(input).unwrap();
        assert_eq!(policy.num_folds(), 2);

        let folds: Vec<&Fold> = policy.iter().collect();
        assert_eq!(folds[0].trainset, vec![0, 1]);
        assert_eq!(folds[0].testset, vec![2]);
        assert_eq!(folds[1].trainset, vec![1, 2]);
        assert_eq!(folds[1].testset, vec![0]);
    }

    #[test]
    fn sparse_fold_numbers_leave_empty_folds() {
        let input = r#"[{"type": "TEST", "rowid": 5, "fold": 2}]"#;
        let policy = FrozenFolding::from_json_str(input).unwrap();
        assert_eq!(policy.num_folds(), 3);

        let folds: Vec<&Fold> = policy.iter().collect();
        assert!(folds[0].trainset.is_empty() && folds[0].testset.is_empty());
        assert_eq!(folds[2].testset, vec![5]);
    }

    #[test]
    fn empty_and_malformed_input_is_rejected() {
        assert!(FrozenFolding::from_json_str("[]").is_err());
        assert!(FrozenFolding::from_json_str("not json").is_err());
        assert!(
            FrozenFolding::from_json_str(r#"[{"type": "EVAL", "rowid": 0, "fold": 0}]"#).is_err()
        );
    }
}
