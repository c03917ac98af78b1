use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::data::record::Record;
use crate::data::tier::Tier;
use crate::error::Result;
use crate::features::encoder::FeatureEncoder;

/// The people table shipped with the binary.
const BUNDLED: &str = include_str!("../../data/people.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    #[serde(flatten)]
    pub record: Record,
    pub tier: Tier,
}

/// Labeled records plus an optional held-out record to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<LabeledRecord>,
    #[serde(default)]
    pub query: Option<Record>,
}

/// Encoded features and one-hot labels, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Dataset {
    /// Parses the compiled-in people table.
    pub fn bundled() -> Result<Dataset> {
        Dataset::from_json_str(BUNDLED)
    }

    pub fn from_json_str(json: &str) -> Result<Dataset> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dataset from a JSON file with the same layout as the bundled one.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encodes every record. Unknown categories are encoded as zero blocks
    /// (and logged by the encoder), never dropped.
    pub fn training_set(&self, encoder: &FeatureEncoder) -> TrainingSet {
        let (inputs, labels) = self.records.iter()
            .map(|labeled| (encoder.encode(&labeled.record).features, labeled.tier.one_hot()))
            .unzip();
        TrainingSet { inputs, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_has_twelve_balanced_records() {
        let ds = Dataset::bundled().unwrap();
        assert_eq!(ds.len(), 12);
        for tier in Tier::ALL {
            assert_eq!(ds.records.iter().filter(|r| r.tier == tier).count(), 4);
        }
        let first = &ds.records[0];
        assert_eq!(first.record, Record::new("Erick", 30, "azul", "São Paulo"));
        assert_eq!(first.tier, Tier::Premium);
    }

    #[test]
    fn bundled_query_is_the_held_out_record() {
        let ds = Dataset::bundled().unwrap();
        let query = ds.query.unwrap();
        assert_eq!((query.age, query.color.as_str(), query.location.as_str()), (28, "azul", "São Paulo"));
    }

    #[test]
    fn training_set_is_aligned() {
        let ds = Dataset::bundled().unwrap();
        let set = ds.training_set(&FeatureEncoder::default());
        assert_eq!(set.len(), 12);
        assert_eq!(set.labels.len(), 12);
        assert!(set.inputs.iter().all(|x| x.len() == 7));
        assert_eq!(set.labels[2], Tier::Basic.one_hot());
    }

    #[test]
    fn substitute_table_without_query() {
        let json = r#"{"records": [
            {"name": "A", "age": 31, "color": "blue", "location": "Rio", "tier": "medium"}
        ]}"#;
        let ds = Dataset::from_json_str(json).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.query.is_none());
        assert_eq!(ds.records[0].tier, Tier::Medium);
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        let err = Dataset::from_json_str(r#"{"records": [{"name": "A"}]}"#).unwrap_err();
        assert!(matches!(err, crate::error::ClassifierError::Dataset(_)));
        let unknown_tier = Dataset::from_json_str(
            r#"{"records": [{"name": "A", "age": 1, "color": "x", "location": "y", "tier": "gold"}]}"#,
        );
        assert!(unknown_tier.is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Dataset::load_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, crate::error::ClassifierError::Io(_)));
    }
}
