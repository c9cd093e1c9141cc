use serde::{Deserialize, Serialize};

/// Epoch count used when callers take the default configuration.
pub const DEFAULT_EPOCHS: usize = 20_000;

/// Configuration for a `Trainer` run.
///
/// Deliberately small: training is full-batch, synchronous, and runs to
/// its fixed epoch count with no early stopping, so the epoch count is
/// the only knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Total number of full passes over the training batch.
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: DEFAULT_EPOCHS,
        }
    }
}
