use crate::{math::matrix::Matrix, layers::dense::Layer};

/// Adam optimizer (Kingma & Ba, 2015).
///
/// Keeps first and second moment estimates for every weight and bias matrix
/// of the network it steps, allocated lazily on the first call.
///
/// ```text
/// m_t = β₁ * m_{t-1} + (1 - β₁) * grad
/// v_t = β₂ * v_{t-1} + (1 - β₂) * grad²
/// m̂_t = m_t / (1 - β₁ᵗ)
/// v̂_t = v_t / (1 - β₂ᵗ)
/// param = param - lr * m̂_t / (√v̂_t + ε)
/// ```
#[derive(Debug, Clone)]
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub eps: f64,
    /// (weights, biases) first moments, one pair per layer.
    m: Vec<(Matrix, Matrix)>,
    /// (weights, biases) second moments, one pair per layer.
    v: Vec<(Matrix, Matrix)>,
    t: i32,
}

impl Adam {
    /// Default: β₁=0.9, β₂=0.999, ε=1e-7
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-7,
            m: Vec::new(),
            v: Vec::new(),
            t: 0,
        }
    }

    /// Number of updates applied so far.
    pub fn steps(&self) -> i32 {
        self.t
    }

    /// Applies one Adam update to every layer. `grads[i]` holds the
    /// (weights_grad, biases_grad) of `layers[i]`.
    pub fn step(&mut self, layers: &mut [Layer], grads: Vec<(Matrix, Matrix)>) {
        assert_eq!(layers.len(), grads.len(), "one gradient pair per layer");

        if self.m.len() != layers.len() {
            let zeros: Vec<(Matrix, Matrix)> = layers.iter()
                .map(|layer| (
                    Matrix::zeros(layer.weights.rows, layer.weights.cols),
                    Matrix::zeros(layer.biases.rows, layer.biases.cols),
                ))
                .collect();
            self.m = zeros.clone();
            self.v = zeros;
            self.t = 0;
        }

        self.t += 1;
        let bias1 = 1.0 - self.beta1.powi(self.t);
        let bias2 = 1.0 - self.beta2.powi(self.t);

        for (i, (w_grad, b_grad)) in grads.into_iter().enumerate() {
            let w_step = self.moment_step(i, true, &w_grad, bias1, bias2);
            let b_step = self.moment_step(i, false, &b_grad, bias1, bias2);
            layers[i].apply_update(&w_step, &b_step);
        }
    }

    /// Updates the moment buffers of one parameter matrix and returns the
    /// step to subtract from it.
    fn moment_step(&mut self, layer: usize, weights: bool, grad: &Matrix, bias1: f64, bias2: f64) -> Matrix {
        let (beta1, beta2) = (self.beta1, self.beta2);
        let (m, v) = if weights {
            (&mut self.m[layer].0, &mut self.v[layer].0)
        } else {
            (&mut self.m[layer].1, &mut self.v[layer].1)
        };

        *m = m.zip_map(grad, |m, g| beta1 * m + (1.0 - beta1) * g);
        *v = v.zip_map(grad, |v, g| beta2 * v + (1.0 - beta2) * g * g);

        let lr = self.learning_rate;
        let eps = self.eps;
        m.zip_map(v, |m, v| lr * (m / bias1) / ((v / bias2).sqrt() + eps))
    }
}
