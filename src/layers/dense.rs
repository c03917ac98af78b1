use rand::Rng;

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

#[derive(Debug, Clone)]
pub struct Layer{
    pub size: usize,
    pub input_size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix,  // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    /// Builds a layer with He weights for ReLU, Xavier weights otherwise, and
    /// zero biases.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let weights = match activation {
            ActivationFunction::ReLU => Matrix::he(input_size, size, rng),
            ActivationFunction::Softmax => Matrix::xavier(input_size, size, rng),
        };

        Layer {
            size,
            input_size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights,
            biases: Matrix::zeros(1, size),
            activator: activation
        }
    }

    fn pre_activation(&self, input: &[f64]) -> Matrix {
        Matrix::row(input) * self.weights.clone() + self.biases.clone()
    }

    /// Forward pass that caches z and a for the following backward pass.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        let z = self.pre_activation(input);
        let a = self.activator.apply(&z.data[0]);
        self.pre_neurons = z;
        self.neurons = Matrix::row(&a);
        a
    }

    /// Forward pass without touching the cached activations.
    pub fn infer(&self, input: &[f64]) -> Vec<f64> {
        let z = self.pre_activation(input);
        self.activator.apply(&z.data[0])
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: &Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // derivative(z) must see the pre-activation, not the output
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.zip_map(&act_derivative, |e, d| e * d);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Subtracts optimizer-computed steps from the parameters.
    pub fn apply_update(&mut self, weights_step: &Matrix, biases_step: &Matrix) {
        self.weights = self.weights.zip_map(weights_step, |w, s| w - s);
        self.biases = self.biases.zip_map(biases_step, |b, s| b - s);
    }
}
