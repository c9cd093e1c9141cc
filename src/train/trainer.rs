use crate::error::{Result, ShapeError};
use crate::layers::perceptron::{Forward, Perceptron};
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::train::train_config::TrainConfig;

/// Owns a layer and its fixed training batch, and drives the epoch loop.
///
/// Each epoch runs the forward pass with the weights left by the previous
/// epoch, computes the full-batch adjustment against the targets, and
/// replaces the weights with `weights + adjustment`. The loop always runs
/// exactly `config.epochs` times; there is no convergence check, no
/// shuffling, and no way to interrupt it.
#[derive(Debug)]
pub struct Trainer {
    layer: Perceptron,
    inputs: Matrix,
    targets: Matrix,
    config: TrainConfig,
    /// Output recorded by the most recent `step`. Kept so callers can read
    /// the final training epoch's output as-is instead of re-deriving it
    /// from the already-updated weights.
    last_output: Option<Matrix>,
}

impl Trainer {
    /// Validates the batch shapes against the layer up front:
    /// inputs and targets must be row-aligned, inputs must carry the
    /// layer's feature count, targets its neuron count.
    pub fn new(
        layer: Perceptron,
        inputs: Matrix,
        targets: Matrix,
        config: TrainConfig,
    ) -> Result<Trainer> {
        if inputs.cols() != layer.input_features() {
            return Err(ShapeError::DimensionMismatch {
                op: "trainer inputs",
                left: (inputs.rows(), inputs.cols()),
                right: (layer.weights().rows(), layer.weights().cols()),
            });
        }
        if targets.rows() != inputs.rows() || targets.cols() != layer.neuron_count() {
            return Err(ShapeError::DimensionMismatch {
                op: "trainer targets",
                left: (targets.rows(), targets.cols()),
                right: (inputs.rows(), layer.neuron_count()),
            });
        }

        Ok(Trainer {
            layer,
            inputs,
            targets,
            config,
            last_output: None,
        })
    }

    /// Runs one epoch: forward pass, adjustment, weight replacement.
    pub fn step(&mut self) -> Result<()> {
        let Forward { output, .. } = self.layer.forward(&self.inputs)?;
        let adjustment = self
            .layer
            .compute_adjustment(&self.inputs, &self.targets, &output)?;
        self.layer.apply_adjustment(&adjustment)?;
        self.last_output = Some(output);
        Ok(())
    }

    /// Runs `step` exactly `config.epochs` times and returns the mean
    /// squared error of the last completed epoch's output (0.0 when the
    /// configured epoch count is zero and no epoch ran).
    pub fn train(&mut self) -> Result<f64> {
        for _ in 0..self.config.epochs {
            self.step()?;
        }

        match &self.last_output {
            Some(output) => MseLoss::loss(output, &self.targets),
            None => Ok(0.0),
        }
    }

    /// Forward pass over an arbitrary batch with the current weights.
    /// Pure; usable before training (against the freshly seeded weights)
    /// as well as after.
    pub fn infer(&self, inputs: &Matrix) -> Result<Matrix> {
        Ok(self.layer.forward(inputs)?.output)
    }

    pub fn layer(&self) -> &Perceptron {
        &self.layer
    }

    pub fn weights(&self) -> &Matrix {
        self.layer.weights()
    }

    /// Training inputs the trainer was built with.
    pub fn inputs(&self) -> &Matrix {
        &self.inputs
    }

    /// Output of the most recent epoch's forward pass; `None` until the
    /// first `step`. Note this was computed with the weights as they were
    /// at the start of that epoch, one update behind `weights()`.
    pub fn last_output(&self) -> Option<&Matrix> {
        self.last_output.as_ref()
    }
}
