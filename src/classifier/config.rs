use serde::{Serialize, Deserialize};

use crate::error::{ClassifierError, Result};

/// Hyperparameters of the tier classifier.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides:
///
/// ```
/// use tier_classifier::ClassifierConfig;
///
/// let config = ClassifierConfig::from_json_str(r#"{"epochs": 300, "seed": 7}"#).unwrap();
/// assert_eq!(config.epochs, 300);
/// assert_eq!(config.hidden_units, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Width of the ReLU hidden layer.
    pub hidden_units: usize,
    /// Fixed epoch budget; training always runs all of them.
    pub epochs: usize,
    /// Samples per optimizer step.
    pub batch_size: usize,
    /// Adam step size.
    pub learning_rate: f64,
    /// Seeds weight init and shuffling. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            hidden_units: 80,
            epochs: 100,
            batch_size: 32,
            learning_rate: 0.001,
            seed: None,
        }
    }
}

impl ClassifierConfig {
    pub fn from_json_str(json: &str) -> Result<ClassifierConfig> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hidden_units == 0 {
            return Err(ClassifierError::InvalidConfig("hidden_units must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(ClassifierError::InvalidConfig("batch_size must be at least 1".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
