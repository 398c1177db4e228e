//! Data containers: aligned rows of sample points and target values.

use std::fs;
use std::path::Path;

use arff::dynamic::de::from_dataset;
use arff::dynamic::DataSet as ArffDataSet;

use crate::error::{Error, Result};
use crate::folding::Fold;

/// Dataset metadata: name, origin, and attribute names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSpecification {
    name: String,
    filename: Option<String>,
    attributes: Vec<String>,
}

impl DataSpecification {
    pub fn new<S: Into<String>>(name: S) -> Self {
        DataSpecification {
            name: name.into(),
            filename: None,
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_ref().map(|s| s.as_str())
    }

    pub fn set_filename<S: Into<String>>(&mut self, filename: S) {
        self.filename = Some(filename.into());
    }

    pub fn add_attribute<S: Into<String>>(&mut self, attribute: S) {
        self.attributes.push(attribute.into());
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

/// One dataset row: a sample point and the function value observed there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataEntry<'a> {
    point: &'a [f64],
    value: f64,
}

impl<'a> DataEntry<'a> {
    pub fn new(point: &'a [f64], value: f64) -> Self {
        DataEntry { point, value }
    }

    pub fn point(&self) -> &'a [f64] {
        self.point
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// An immutable collection of aligned (point, value) rows.
///
/// Points are stored row-major; row `i` occupies `points[i*dim..(i+1)*dim]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContainer {
    points: Vec<f64>,
    values: Vec<f64>,
    dim: usize,
    spec: DataSpecification,
}

impl DataContainer {
    pub fn new(points: Vec<f64>, dim: usize, values: Vec<f64>) -> Result<Self> {
        if dim == 0 {
            return Err(Error::invalid("point dimension must be at least 1"));
        }
        if points.len() % dim != 0 {
            return Err(Error::invalid(format!(
                "point buffer of length {} is not a multiple of dimension {}",
                points.len(),
                dim
            )));
        }
        if points.len() / dim != values.len() {
            return Err(Error::invalid(format!(
                "{} points do not match {} values",
                points.len() / dim,
                values.len()
            )));
        }
        Ok(DataContainer {
            points,
            values,
            dim,
            spec: DataSpecification::new("unnamed"),
        })
    }

    pub fn with_spec(mut self, spec: DataSpecification) -> Self {
        self.spec = spec;
        self
    }

    /// Parse an ARFF document and split off the column named `target`.
    pub fn from_arff_str(input: &str, target: &str) -> Result<Self> {
        let raw = ArffDataSet::from_str(input)?;
        let (dx, dy) = raw.split_one(target);

        let dim = dx.n_cols();
        let points: Vec<f64> = from_dataset(&dx)?;
        let values: Vec<f64> = from_dataset(&dy)?;

        info!(
            "loaded {} rows of dimension {} from arff data",
            values.len(),
            dim
        );

        let mut data = DataContainer::new(points, dim, values)?;
        data.spec = DataSpecification::new("arff");
        data.spec.add_attribute(target);
        Ok(data)
    }

    /// Read an ARFF file from disk.
    pub fn from_arff_file<P: AsRef<Path>>(path: P, target: &str) -> Result<Self> {
        let input = fs::read_to_string(&path)?;
        let mut data = Self::from_arff_str(&input, target)?;
        data.spec.set_filename(path.as_ref().to_string_lossy());
        Ok(data)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn spec(&self) -> &DataSpecification {
        &self.spec
    }

    pub fn point(&self, row: usize) -> &[f64] {
        &self.points[row * self.dim..(row + 1) * self.dim]
    }

    pub fn value(&self, row: usize) -> f64 {
        self.values[row]
    }

    pub fn entry(&self, row: usize) -> DataEntry {
        DataEntry::new(self.point(row), self.value(row))
    }

    pub fn entries(&self) -> impl Iterator<Item = DataEntry> + '_ {
        (0..self.size()).map(move |i| self.entry(i))
    }

    /// Sub-select rows by index, preserving the given order.
    pub fn select(&self, indices: &[usize]) -> Result<DataContainer> {
        let mut points = Vec::with_capacity(indices.len() * self.dim);
        let mut values = Vec::with_capacity(indices.len());
        for &i in indices {
            if i >= self.size() {
                return Err(Error::invalid(format!(
                    "row index {} out of range for {} rows",
                    i,
                    self.size()
                )));
            }
            points.extend_from_slice(self.point(i));
            values.push(self.values[i]);
        }
        Ok(DataContainer {
            points,
            values,
            dim: self.dim,
            spec: self.spec.clone(),
        })
    }

    /// Build the (training, validation) container pair for one fold.
    pub fn fold(&self, fold: &Fold) -> Result<(DataContainer, DataContainer)> {
        let train = self.select(&fold.trainset)?;
        let test = self.select(&fold.testset)?;
        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataContainer {
        let points = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let values = vec![0.5, 2.5, 4.5, 6.5];
        DataContainer::new(points, 2, values).unwrap()
    }

    #[test]
    fn construction_checks_row_agreement() {
        assert!(DataContainer::new(vec![1.0, 2.0, 3.0], 2, vec![0.0]).is_err());
        assert!(DataContainer::new(vec![1.0, 2.0], 2, vec![0.0, 1.0]).is_err());
        assert!(DataContainer::new(vec![1.0, 2.0], 0, vec![]).is_err());
    }

    #[test]
    fn rows_and_entries() {
        let data = sample();
        assert_eq!(data.size(), 4);
        assert_eq!(data.dim(), 2);
        assert_eq!(data.point(1), &[2.0, 3.0]);
        assert_eq!(data.value(3), 6.5);

        let entries: Vec<_> = data.entries().collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].point(), &[4.0, 5.0]);
        assert_eq!(entries[2].value(), 4.5);
    }

    #[test]
    fn select_preserves_order() {
        let data = sample();
        let sub = data.select(&[3, 0, 3]).unwrap();
        assert_eq!(sub.size(), 3);
        assert_eq!(sub.point(0), &[6.0, 7.0]);
        assert_eq!(sub.value(1), 0.5);
        assert_eq!(sub.value(2), 6.5);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let data = sample();
        assert!(data.select(&[0, 4]).is_err());
    }

    #[test]
    fn fold_produces_disjoint_containers() {
        let data = sample();
        let fold = Fold {
            trainset: vec![0, 1],
            testset: vec![2, 3],
        };
        let (train, test) = data.fold(&fold).unwrap();
        assert_eq!(train.size(), 2);
        assert_eq!(test.size(), 2);
        assert_eq!(train.value(0), 0.5);
        assert_eq!(test.point(1), &[6.0, 7.0]);
    }

    #[test]
    fn arff_ingestion() {
        let input = "@RELATION synthetic\n\
                     @ATTRIBUTE x0 NUMERIC\n\
                     @ATTRIBUTE x1 NUMERIC\n\
                     @ATTRIBUTE y NUMERIC\n\
                     @DATA\n\
                     0.0,1.0,0.5\n\
                     1.0,2.0,1.5\n\
                     2.0,3.0,2.5\n";
        let data = DataContainer::from_arff_str(input, "y").unwrap();
        assert_eq!(data.size(), 3);
        assert_eq!(data.dim(), 2);
        assert_eq!(data.point(2), &[2.0, 3.0]);
        assert_eq!(data.value(1), 1.5);
    }

    #[test]
    fn specification_round_trip() {
        let mut spec = DataSpecification::new("synthetic");
        spec.set_filename("train.arff");
        spec.add_attribute("x0");
        spec.add_attribute("y");

        let json = serde_json::to_string(&spec).unwrap();
        let restored: DataSpecification = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, spec);
        assert_eq!(restored.filename(), Some("train.arff"));
        assert_eq!(restored.attributes(), ["x0", "y"]);
    }
}
