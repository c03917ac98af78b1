/// Per-epoch training statistics emitted by `train_loop`.
///
/// One value is logged at `debug` level and appended to the returned history
/// at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean cross-entropy over all samples in this epoch.
    pub train_loss: f64,
    /// Fraction of training samples whose argmax matches the label, in [0, 1].
    pub train_accuracy: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
