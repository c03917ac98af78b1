pub mod encoder;

pub use encoder::{AgeRange, EncodedRecord, FeatureEncoder, UnknownFields, FEATURE_WIDTH};
