use crate::data::record::{Color, Location, Record};
use crate::error::{ClassifierError, Result};

/// Width of an encoded record: age, three color slots, three location slots.
pub const FEATURE_WIDTH: usize = 1 + Color::ALL.len() + Location::ALL.len();

/// Age bounds used for min-max scaling. Values outside the range are not
/// clamped and scale past [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AgeRange {
    fn default() -> Self {
        AgeRange { min: 25.0, max: 40.0 }
    }
}

impl AgeRange {
    /// Both bounds must be finite with `min < max`; anything else would make
    /// `normalize` divide by zero or produce NaN.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ClassifierError::InvalidConfig(format!(
                "age range needs finite min < max, got [{}, {}]",
                self.min, self.max
            )))
        }
    }

    pub fn normalize(&self, age: i32) -> f64 {
        (age as f64 - self.min) / (self.max - self.min)
    }
}

/// Which categorical fields fell back to an all-zero block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownFields {
    pub color: Option<String>,
    pub location: Option<String>,
}

impl UnknownFields {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.location.is_none()
    }
}

/// Encoder output: the feature vector plus the fields it could not place.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRecord {
    pub features: Vec<f64>,
    pub unknown: UnknownFields,
}

/// Turns a `Record` into `[age_norm, color one-hot, location one-hot]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureEncoder {
    age_range: AgeRange,
}

impl FeatureEncoder {
    pub fn new(age_range: AgeRange) -> Result<FeatureEncoder> {
        age_range.validate()?;
        Ok(FeatureEncoder { age_range })
    }

    pub fn encode(&self, record: &Record) -> EncodedRecord {
        let mut features = Vec::with_capacity(FEATURE_WIDTH);
        let mut unknown = UnknownFields::default();

        features.push(self.age_range.normalize(record.age));

        let color = Color::from_name(&record.color);
        if color.is_none() {
            log::warn!("unknown color {:?} for {:?}; encoding as zeros", record.color, record.name);
            unknown.color = Some(record.color.clone());
        }
        features.extend(one_hot(color.map(Color::index), Color::ALL.len()));

        let location = Location::from_name(&record.location);
        if location.is_none() {
            log::warn!("unknown location {:?} for {:?}; encoding as zeros", record.location, record.name);
            unknown.location = Some(record.location.clone());
        }
        features.extend(one_hot(location.map(Location::index), Location::ALL.len()));

        EncodedRecord { features, unknown }
    }
}

fn one_hot(index: Option<usize>, width: usize) -> Vec<f64> {
    (0..width).map(|i| if Some(i) == index { 1.0 } else { 0.0 }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(age: i32, color: &str, location: &str) -> EncodedRecord {
        FeatureEncoder::default().encode(&Record::new("x", age, color, location))
    }

    #[test]
    fn seed_record_encoding() {
        let enc = encode(30, "azul", "São Paulo");
        assert!((enc.features[0] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(&enc.features[1..], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert!(enc.unknown.is_empty());
    }

    #[test]
    fn query_record_encoding() {
        let enc = encode(28, "azul", "São Paulo");
        assert!((enc.features[0] - 0.2).abs() < 1e-12);
        assert_eq!(&enc.features[1..], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn known_records_have_unit_blocks() {
        for age in 25..=40 {
            for color in ["azul", "vermelho", "verde"] {
                for location in ["São Paulo", "Rio", "Curitiba"] {
                    let f = encode(age, color, location).features;
                    assert_eq!(f.len(), FEATURE_WIDTH);
                    assert!((0.0..=1.0).contains(&f[0]));
                    assert_eq!(f[1..4].iter().sum::<f64>(), 1.0);
                    assert_eq!(f[4..7].iter().sum::<f64>(), 1.0);
                }
            }
        }
    }

    #[test]
    fn unknown_color_is_zero_and_flagged() {
        let enc = encode(30, "purple", "Rio");
        assert_eq!(&enc.features[1..4], &[0.0, 0.0, 0.0]);
        assert_eq!(&enc.features[4..7], &[0.0, 1.0, 0.0]);
        assert_eq!(enc.unknown.color.as_deref(), Some("purple"));
        assert!(enc.unknown.location.is_none());
    }

    #[test]
    fn unknown_location_is_zero_and_flagged() {
        let enc = encode(30, "verde", "Recife");
        assert_eq!(&enc.features[4..7], &[0.0, 0.0, 0.0]);
        assert_eq!(enc.unknown.location.as_deref(), Some("Recife"));
    }

    #[test]
    fn ages_outside_range_are_not_clamped() {
        assert!((encode(42, "verde", "Rio").features[0] - 17.0 / 15.0).abs() < 1e-12);
        assert!((encode(24, "verde", "Rio").features[0] + 1.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn encoding_is_pure() {
        let encoder = FeatureEncoder::default();
        let record = Record::new("Ana", 25, "vermelho", "Rio");
        assert_eq!(encoder.encode(&record), encoder.encode(&record));
    }

    #[test]
    fn custom_age_range() {
        let encoder = FeatureEncoder::new(AgeRange { min: 20.0, max: 60.0 }).unwrap();
        let f = encoder.encode(&Record::new("x", 40, "azul", "Rio")).features;
        assert!((f[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_age_range_is_rejected() {
        for (min, max) in [(30.0, 30.0), (40.0, 25.0), (f64::NAN, 40.0), (25.0, f64::INFINITY)] {
            let err = FeatureEncoder::new(AgeRange { min, max }).unwrap_err();
            assert!(matches!(err, ClassifierError::InvalidConfig(_)), "[{min}, {max}]");
        }
        assert!(AgeRange::default().validate().is_ok());
    }
}
