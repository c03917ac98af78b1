pub mod dataset;
pub mod record;
pub mod tier;

pub use dataset::{Dataset, LabeledRecord, TrainingSet};
pub use record::{Color, Location, Record};
pub use tier::Tier;
