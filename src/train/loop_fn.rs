use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{ClassifierError, Result};
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::adam::Adam;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for exactly `config.epochs` epochs with categorical
/// cross-entropy and returns the statistics of every epoch.
///
/// # Arguments
/// - `network`      — mutable reference to the network; modified in place
/// - `train_inputs` — training samples, each of length `network.input_size()`
/// - `train_labels` — one-hot targets of length `network.output_size()`
/// - `optimizer`    — Adam optimizer; its moments persist across epochs
/// - `config`       — epoch budget and batch size
/// - `rng`          — drives the per-epoch shuffle
///
/// # Errors
/// - `InvalidTrainingData` if the set is empty, the lengths differ, a sample
///   or label has the wrong width or a non-finite value, or `batch_size == 0`
/// - `Diverged` as soon as an epoch's mean loss is not finite
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
    optimizer: &mut Adam,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    validate(network, train_inputs, train_labels, config)?;

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        let train_loss = run_one_epoch(
            network,
            train_inputs,
            train_labels,
            optimizer,
            config.batch_size,
            rng,
        );

        if !train_loss.is_finite() {
            return Err(ClassifierError::Diverged { epoch, loss: train_loss });
        }

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        let train_accuracy = compute_accuracy(network, train_inputs, train_labels);

        log::debug!(
            "epoch {epoch}/{}: loss = {train_loss:.6}, accuracy = {train_accuracy:.3}",
            config.epochs
        );

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            train_accuracy,
            elapsed_ms,
        });
    }

    Ok(history)
}

/// Index of the maximum element in a slice. Ties resolve to the lower index.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_i, best), (i, &x)| {
            if x > best { (i, x) } else { (best_i, best) }
        })
        .0
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn validate(
    network: &Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<()> {
    if inputs.is_empty() {
        return Err(ClassifierError::InvalidTrainingData("training set is empty".into()));
    }
    if inputs.len() != labels.len() {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "{} samples but {} labels",
            inputs.len(),
            labels.len()
        )));
    }
    if config.batch_size == 0 {
        return Err(ClassifierError::InvalidTrainingData("batch_size must be at least 1".into()));
    }
    if let Some(bad) = inputs.iter().position(|x| x.len() != network.input_size()) {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "sample {bad} has {} features, expected {}",
            inputs[bad].len(),
            network.input_size()
        )));
    }
    if let Some(bad) = labels.iter().position(|y| y.len() != network.output_size()) {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "label {bad} has width {}, expected {}",
            labels[bad].len(),
            network.output_size()
        )));
    }
    // ReLU maps NaN to 0, so a non-finite sample would never surface as a
    // non-finite loss.
    if let Some(bad) = inputs.iter().position(|x| x.iter().any(|v| !v.is_finite())) {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "sample {bad} has a non-finite feature: {:?}",
            inputs[bad]
        )));
    }
    if let Some(bad) = labels.iter().position(|y| y.iter().any(|v| !v.is_finite())) {
        return Err(ClassifierError::InvalidTrainingData(format!(
            "label {bad} has a non-finite value: {:?}",
            labels[bad]
        )));
    }
    Ok(())
}

/// Runs one full epoch of mini-batch Adam over the training data.
/// Returns the mean loss over all samples.
fn run_one_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    optimizer: &mut Adam,
    batch_size: usize,
    rng: &mut R,
) -> f64 {
    let n = inputs.len();
    let mut total_loss = 0.0;

    // Shuffle sample order each epoch.
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    for batch in indices.chunks(batch_size) {
        let inv_batch = 1.0 / batch.len() as f64;

        let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();

        for &idx in batch {
            let input    = &inputs[idx];
            let expected = &labels[idx];

            let output = network.forward(input);
            total_loss += CrossEntropyLoss::loss(&output, expected);

            let mut delta = Matrix::row(&CrossEntropyLoss::derivative(&output, expected));

            // Backward pass.
            for i in (0..network.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::row(input)
                } else {
                    network.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) = network.layers[i].compute_gradients(&delta, &input_for_layer);

                if i > 0 {
                    // ∂L/∂a_{i-1} = δ_i · W_iᵀ
                    delta = b_grad.clone() * network.layers[i].weights.transpose();
                }

                acc_grads[i].0 = acc_grads[i].0.clone() + w_grad;
                acc_grads[i].1 = acc_grads[i].1.clone() + b_grad;
            }
        }

        let averaged = acc_grads.into_iter()
            .map(|(w, b)| (w.map(|x| x * inv_batch), b.map(|x| x * inv_batch)))
            .collect();
        optimizer.step(&mut network.layers, averaged);
    }

    total_loss / n as f64
}

/// Fraction of samples classified correctly (argmax match).
fn compute_accuracy(network: &Network, inputs: &[Vec<f64>], labels: &[Vec<f64>]) -> f64 {
    let correct = inputs.iter().zip(labels.iter())
        .filter(|(input, label)| argmax(&network.predict(input)) == argmax(label))
        .count();
    correct as f64 / inputs.len() as f64
}
