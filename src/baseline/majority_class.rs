use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FromIterator;

/// Predicts the most frequent training label, ignoring the features.
#[derive(Debug)]
pub struct MajorityClassifier<C>
where
    C: Eq + Hash,
{
    counts: HashMap<C, usize>,
}

impl<'a, C> FromIterator<(&'a [f64], C)> for MajorityClassifier<C>
where
    C: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (&'a [f64], C)>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        for (_, y) in iter {
            *counts.entry(y).or_insert(0) += 1;
        }
        MajorityClassifier { counts }
    }
}

impl<C> MajorityClassifier<C>
where
    C: Eq + Hash,
{
    pub fn predict(&self) -> &C {
        self.counts
            .iter()
            .max_by_key(|&(_, n)| *n)
            .map(|(c, _)| c)
            .unwrap()
    }
}

#[test]
fn majority_label_wins() {
    let rows: Vec<(&[f64], u8)> = vec![
        (&[0.0], 1),
        (&[1.0], 1),
        (&[2.0], 1),
        (&[3.0], 0),
    ];
    let model: MajorityClassifier<u8> = rows.into_iter().collect();
    assert_eq!(*model.predict(), 1);
}
