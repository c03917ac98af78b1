pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod error;
pub mod data;
pub mod features;
pub mod classifier;
pub mod ranking;
pub mod pipeline;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use optim::adam::Adam;
pub use train::loop_fn::train_loop;
pub use error::{ClassifierError, Result};
pub use data::{Dataset, Record, Tier, TrainingSet};
pub use features::{FeatureEncoder, EncodedRecord};
pub use classifier::{Classifier, ClassifierConfig};
pub use ranking::PredictionRanker;
pub use pipeline::run;
