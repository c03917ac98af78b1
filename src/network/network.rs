use rand::Rng;

use crate::{layers::dense::Layer, network::spec::{is_chained, LayerSpec}};

#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from layer specs, drawing initial weights from `rng`.
    ///
    /// # Panics
    /// Panics if a layer's `input_size` differs from the previous layer's `size`.
    pub fn new<R: Rng + ?Sized>(layer_specs: &[LayerSpec], rng: &mut R) -> Network {
        assert!(is_chained(layer_specs), "layer sizes do not chain");
        let layers = layer_specs.iter()
            .map(|spec| Layer::new(spec.size, spec.input_size, spec.activation, rng))
            .collect();
        Network { layers }
    }

    /// Width of the input the first layer expects.
    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |layer| layer.input_size)
    }

    /// Width of the final layer's output.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |layer| layer.size)
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    /// Forward pass for inference; leaves the cached activations untouched.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        self.layers.iter().fold(input.to_vec(), |current, layer| layer.infer(&current))
    }
}
