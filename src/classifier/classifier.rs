use rand::{rngs::StdRng, SeedableRng};

use crate::activation::activation::ActivationFunction;
use crate::classifier::config::ClassifierConfig;
use crate::data::dataset::TrainingSet;
use crate::data::tier::Tier;
use crate::error::{ClassifierError, Result};
use crate::features::encoder::FEATURE_WIDTH;
use crate::network::{network::Network, spec::LayerSpec};
use crate::optim::adam::Adam;
use crate::train::{train_loop, EpochStats, TrainConfig};

/// Dense ReLU hidden layer feeding a softmax over the three tiers.
#[derive(Debug)]
pub struct Classifier {
    network: Network,
    config: ClassifierConfig,
    rng: StdRng,
}

impl Classifier {
    /// Layer layout for a given config: `7 -> hidden (ReLU) -> 3 (softmax)`.
    pub fn architecture(config: &ClassifierConfig) -> Vec<LayerSpec> {
        vec![
            LayerSpec::new(config.hidden_units, FEATURE_WIDTH, ActivationFunction::ReLU),
            LayerSpec::new(Tier::ALL.len(), config.hidden_units, ActivationFunction::Softmax),
        ]
    }

    /// Builds an untrained classifier with freshly initialized weights.
    pub fn new(config: ClassifierConfig) -> Result<Classifier> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let network = Network::new(&Classifier::architecture(&config), &mut rng);
        Ok(Classifier { network, config, rng })
    }

    /// Runs the full epoch budget over `set` and returns per-epoch stats.
    /// Blocks until every epoch has run.
    pub fn train(&mut self, set: &TrainingSet) -> Result<Vec<EpochStats>> {
        log::info!(
            "training {FEATURE_WIDTH} -> {} -> {} on {} records for {} epochs",
            self.config.hidden_units,
            Tier::ALL.len(),
            set.len(),
            self.config.epochs
        );

        let mut optimizer = Adam::new(self.config.learning_rate);
        let train_config = TrainConfig::new(self.config.epochs, self.config.batch_size);
        let history = train_loop(
            &mut self.network,
            &set.inputs,
            &set.labels,
            &mut optimizer,
            &train_config,
            &mut self.rng,
        )?;

        if let Some(last) = history.last() {
            log::info!(
                "training finished: loss = {:.4}, accuracy = {:.2}",
                last.train_loss,
                last.train_accuracy
            );
        }
        Ok(history)
    }

    /// Probability of each tier, in `Tier::ALL` order.
    pub fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != FEATURE_WIDTH {
            return Err(ClassifierError::InputShape {
                expected: FEATURE_WIDTH,
                got: features.len(),
            });
        }
        Ok(self.network.predict(features))
    }
}
