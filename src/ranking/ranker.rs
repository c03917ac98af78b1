use std::fmt;

use crate::data::tier::Tier;
use crate::error::{ClassifierError, Result};

/// One line of the ranked output.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPrediction {
    pub label: String,
    /// Position of the label in the output layer.
    pub index: usize,
    pub probability: f64,
}

impl fmt::Display for RankedPrediction {
    /// `premium (87.31%)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.label, self.probability * 100.0)
    }
}

/// Orders a probability vector by descending probability and renders it.
///
/// Equal probabilities keep label order, so the output is fully determined by
/// the input.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRanker {
    labels: Vec<String>,
}

impl Default for PredictionRanker {
    fn default() -> Self {
        PredictionRanker::new(Tier::names())
    }
}

impl PredictionRanker {
    /// `labels[i]` names output unit `i`.
    pub fn new(labels: Vec<String>) -> PredictionRanker {
        PredictionRanker { labels }
    }

    pub fn rank(&self, probabilities: &[f64]) -> Result<Vec<RankedPrediction>> {
        if probabilities.len() != self.labels.len() {
            return Err(ClassifierError::InputShape {
                expected: self.labels.len(),
                got: probabilities.len(),
            });
        }

        let mut ranked: Vec<RankedPrediction> = self.labels.iter()
            .zip(probabilities.iter())
            .enumerate()
            .map(|(index, (label, &probability))| RankedPrediction {
                label: label.clone(),
                index,
                probability,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.probability.total_cmp(&a.probability).then(a.index.cmp(&b.index))
        });
        Ok(ranked)
    }

    /// One `"<label> (<pp.pp>%)"` line per class, best first, newline-joined.
    pub fn format(&self, probabilities: &[f64]) -> Result<String> {
        let lines: Vec<String> = self.rank(probabilities)?
            .iter()
            .map(|r| r.to_string())
            .collect();
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending_and_formats_two_decimals() {
        let out = PredictionRanker::default().format(&[0.1, 0.7, 0.2]).unwrap();
        assert_eq!(out, "medium (70.00%)\nbasic (20.00%)\npremium (10.00%)");
    }

    #[test]
    fn rounds_to_two_decimals() {
        let out = PredictionRanker::default().format(&[0.876543, 0.1, 0.023457]).unwrap();
        assert_eq!(out.lines().next(), Some("premium (87.65%)"));
        assert_eq!(out.lines().last(), Some("basic (2.35%)"));
    }

    #[test]
    fn ranked_probabilities_keep_their_mass() {
        let ranked = PredictionRanker::default().rank(&[0.25, 0.5, 0.25]).unwrap();
        let total: f64 = ranked.iter().map(|r| r.probability).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(ranked.windows(2).all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn ties_follow_label_order() {
        let ranked = PredictionRanker::default().rank(&[0.25, 0.5, 0.25]).unwrap();
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["medium", "premium", "basic"]);

        let all_equal = PredictionRanker::default().rank(&[1.0 / 3.0; 3]).unwrap();
        let order: Vec<usize> = all_equal.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn custom_labels() {
        let ranker = PredictionRanker::new(vec!["yes".into(), "no".into()]);
        assert_eq!(ranker.format(&[0.4, 0.6]).unwrap(), "no (60.00%)\nyes (40.00%)");
    }

    #[test]
    fn wrong_length_is_an_input_shape_error() {
        let err = PredictionRanker::default().rank(&[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, ClassifierError::InputShape { expected: 3, got: 2 }));
    }
}
