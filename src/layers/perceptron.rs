use serde::{Deserialize, Serialize};

use crate::activation::sigmoid::Sigmoid;
use crate::error::{Result, ShapeError};
use crate::math::matrix::Matrix;

/// Result of one forward pass over an input batch.
#[derive(Debug, Clone)]
pub struct Forward {
    /// Pre-activation weighted sums; one row per sample, one column per neuron.
    pub state: Matrix,
    /// Sigmoid of `state`, same shape.
    pub output: Matrix,
}

/// A single dense layer of sigmoid neurons, without biases.
///
/// The weight matrix has one row per neuron and one column per input
/// feature. It is the only value in the crate with a lifetime longer than
/// one training epoch, and it is replaced (never edited in place) on each
/// update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perceptron {
    neuron_count: usize,
    input_features: usize,
    weights: Matrix,
}

impl Perceptron {
    /// Creates a layer with weights drawn uniformly from [-1, 1) by a
    /// generator seeded with `seed`; the same seed reproduces the same
    /// starting point bit for bit.
    pub fn new(neuron_count: usize, input_features: usize, seed: u64) -> Perceptron {
        Perceptron {
            neuron_count,
            input_features,
            weights: Matrix::random(neuron_count, input_features, seed),
        }
    }

    /// Wraps an explicit weight matrix, reading the layer dimensions off
    /// its shape.
    pub fn from_weights(weights: Matrix) -> Perceptron {
        Perceptron {
            neuron_count: weights.rows(),
            input_features: weights.cols(),
            weights,
        }
    }

    pub fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    pub fn input_features(&self) -> usize {
        self.input_features
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Forward pass over a batch: `state = inputs · weightsᵀ`, so each
    /// neuron's weight row is dotted feature-by-feature against each input
    /// row, then `output = σ(state)`. Pure; the layer keeps nothing.
    pub fn forward(&self, inputs: &Matrix) -> Result<Forward> {
        if inputs.cols() != self.input_features {
            return Err(ShapeError::DimensionMismatch {
                op: "forward",
                left: (inputs.rows(), inputs.cols()),
                right: (self.weights.rows(), self.weights.cols()),
            });
        }

        let state = inputs.multiply(&self.weights.transpose())?;
        let output = state.map(Sigmoid::activate);

        Ok(Forward { state, output })
    }

    /// Full-batch weight delta for one epoch:
    /// residual `targets - output`, scaled per entry by the activation
    /// derivative, then accumulated over samples via `scaledᵀ · inputs`.
    ///
    /// The result has the weight matrix's shape. There is no division by
    /// the sample count and no learning-rate factor, so the step magnitude
    /// grows with batch size.
    pub fn compute_adjustment(
        &self,
        inputs: &Matrix,
        targets: &Matrix,
        output: &Matrix,
    ) -> Result<Matrix> {
        if targets.cols() != self.neuron_count {
            return Err(ShapeError::DimensionMismatch {
                op: "compute_adjustment",
                left: (targets.rows(), targets.cols()),
                right: (self.weights.rows(), self.weights.cols()),
            });
        }

        let error = targets.sub(output)?;
        let derivative = output.map(Sigmoid::derivative_from_output);
        let scaled_error = error.hadamard(&derivative)?;

        scaled_error.transpose().multiply(inputs)
    }

    /// Replaces the weights with `weights + adjustment`.
    pub fn apply_adjustment(&mut self, adjustment: &Matrix) -> Result<()> {
        self.weights = self.weights.add(adjustment)?;
        Ok(())
    }
}
