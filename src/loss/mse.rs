use crate::error::Result;
use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²) over every matrix entry.
    ///
    /// Reporting only. The training update never consults a loss
    /// derivative; its rule is fixed in `Perceptron::compute_adjustment`.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        let n = (predicted.rows() * predicted.cols()) as f64;
        Ok(MseLoss::total_squared_error(predicted, expected)? / n)
    }

    /// Sum of squared residuals, without the mean normalization.
    pub fn total_squared_error(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        let residual = predicted.sub(expected)?;
        let total = residual
            .data()
            .iter()
            .flatten()
            .map(|r| r * r)
            .sum::<f64>();
        Ok(total)
    }
}
