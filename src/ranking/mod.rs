pub mod ranker;

pub use ranker::{PredictionRanker, RankedPrediction};
