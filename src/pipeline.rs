//! Encode, train, predict and rank in one call.

use crate::classifier::{Classifier, ClassifierConfig};
use crate::data::{Dataset, Record};
use crate::error::Result;
use crate::features::FeatureEncoder;
use crate::ranking::PredictionRanker;

/// Trains a fresh classifier on `dataset` and returns the ranked tiers for
/// `query`, one `"<tier> (<pp.pp>%)"` line each.
pub fn run(dataset: &Dataset, query: &Record, config: ClassifierConfig) -> Result<String> {
    let encoder = FeatureEncoder::default();
    let set = dataset.training_set(&encoder);
    log::info!("encoded {} labeled records", set.len());

    let mut classifier = Classifier::new(config)?;
    classifier.train(&set)?;

    let encoded = encoder.encode(query);
    let probabilities = classifier.predict(&encoded.features)?;
    log::debug!("{} -> {:?}", query.name, probabilities);

    PredictionRanker::default().format(&probabilities)
}
