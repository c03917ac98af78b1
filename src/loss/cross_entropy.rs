/// Categorical cross-entropy loss for use with a Softmax output layer.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Computes the scalar cross-entropy loss:
    ///   L = -sum(expected[i] * log(predicted[i] + eps))
    ///
    /// `predicted` — softmax probabilities, shape [n_classes]
    /// `expected`  — one-hot (or soft) target distribution, shape [n_classes]
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| -e * (p + EPS).ln())
            .sum()
    }

    /// Gradient of the combined Softmax + cross-entropy w.r.t. the pre-softmax
    /// logits:
    ///   ∂L/∂z_i = predicted[i] - expected[i]
    ///
    /// The Softmax derivative is identity (1.0) so this is not applied twice.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_prediction_has_near_zero_loss() {
        assert!(CrossEntropyLoss::loss(&[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]) < 1e-9);
    }

    #[test]
    fn loss_only_counts_the_true_class() {
        let loss = CrossEntropyLoss::loss(&[0.5, 0.25, 0.25], &[0.0, 1.0, 0.0]);
        assert!((loss - 4.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn confident_mistake_stays_finite() {
        assert!(CrossEntropyLoss::loss(&[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0]).is_finite());
    }

    #[test]
    fn derivative_is_prediction_minus_target() {
        let d = CrossEntropyLoss::derivative(&[0.7, 0.2, 0.1], &[1.0, 0.0, 0.0]);
        assert!((d[0] + 0.3).abs() < 1e-12);
        assert!((d[1] - 0.2).abs() < 1e-12);
    }
}
