use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `size`       — number of neurons in this layer
/// - `input_size` — number of neurons feeding into this layer (i.e. the output
///                  size of the previous layer, or the raw input dimension for
///                  the first layer)
/// - `activation` — activation function applied after the linear transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
}

impl LayerSpec {
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> LayerSpec {
        LayerSpec { size, input_size, activation }
    }
}

/// True when every layer's `input_size` equals the previous layer's `size`.
pub fn is_chained(specs: &[LayerSpec]) -> bool {
    specs.windows(2).all(|pair| pair[0].size == pair[1].input_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_broken_chain() {
        let ok = [
            LayerSpec::new(80, 7, ActivationFunction::ReLU),
            LayerSpec::new(3, 80, ActivationFunction::Softmax),
        ];
        let broken = [
            LayerSpec::new(80, 7, ActivationFunction::ReLU),
            LayerSpec::new(3, 40, ActivationFunction::Softmax),
        ];
        assert!(is_chained(&ok));
        assert!(!is_chained(&broken));
    }

    #[test]
    fn deserializes_from_json() {
        let spec: LayerSpec =
            serde_json::from_str(r#"{"size": 3, "input_size": 80, "activation": "Softmax"}"#).unwrap();
        assert_eq!(spec, LayerSpec::new(3, 80, ActivationFunction::Softmax));
    }
}
