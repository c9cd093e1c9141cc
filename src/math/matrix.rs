use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ShapeError};

/// A rectangular, row-major matrix of f64 values.
///
/// Rectangularity (every row the same length, at least one row and one
/// column) is checked once in `from_rows`; the other constructors produce
/// rectangular data directly. Every operation returns a new matrix, so an
/// existing `Matrix` is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from explicit rows, validating the shape invariant.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(ShapeError::EmptyMatrix { op: "from_rows" });
        }
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::RaggedRow {
                    op: "from_rows",
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Fills a matrix with i.i.d. samples uniform on [-1, 1), i.e.
    /// `2 * U[0,1) - 1`, drawn from a generator seeded with `seed`.
    /// The same seed always reproduces the same matrix.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow of the underlying rows.
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Standard matrix product. Requires `self.cols == rhs.rows`.
    /// Each cell sums its products in ascending index order.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(ShapeError::DimensionMismatch {
                op: "multiply",
                left: (self.rows, self.cols),
                right: (rhs.rows, rhs.cols),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Elementwise binary combination. Requires identical shapes.
    pub fn combine<F>(&self, rhs: &Matrix, op: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(ShapeError::DimensionMismatch {
                op: "combine",
                left: (self.rows, self.cols),
                right: (rhs.rows, rhs.cols),
            });
        }

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a
                    .iter()
                    .zip(row_b.iter())
                    .map(|(a, b)| op(*a, *b))
                    .collect()
            })
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.combine(rhs, |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.combine(rhs, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.combine(rhs, |a, b| a * b)
    }

    /// Elementwise unary map.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(|&x| functor(x)).collect())
            .collect();

        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}

/// Console layout: rows between one pair of outer brackets, each row on its
/// own line, continuation rows indented by a single space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
            if i != self.rows - 1 {
                writeln!(f, ",")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(data).unwrap()
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(matches!(
            Matrix::from_rows(vec![]),
            Err(ShapeError::EmptyMatrix { .. })
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![]]),
            Err(ShapeError::EmptyMatrix { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                op: "from_rows",
                row: 1,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn transpose_is_involutive() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn transpose_swaps_shape_and_entries() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(0, 1), 4.0);
        assert_eq!(t.get(2, 0), 3.0);
    }

    #[test]
    fn multiply_computes_the_standard_product() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, matrix(vec![vec![19.0, 22.0], vec![43.0, 50.0]]));
    }

    #[test]
    fn multiply_is_associative_within_tolerance() {
        let a = matrix(vec![vec![0.5, -1.25, 2.0], vec![3.5, 0.75, -0.5]]);
        let b = matrix(vec![vec![1.5, 0.25], vec![-2.0, 1.0], vec![0.125, -3.0]]);
        let c = matrix(vec![vec![2.25, -1.0, 0.5], vec![0.75, 4.0, -2.5]]);

        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();

        assert_eq!(left.rows(), right.rows());
        assert_eq!(left.cols(), right.cols());
        for i in 0..left.rows() {
            for j in 0..left.cols() {
                assert!((left.get(i, j) - right.get(i, j)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn multiply_rejects_inner_dimension_mismatch() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0]]);
        let b = matrix(vec![vec![1.0], vec![2.0]]);
        let err = a.multiply(&b).unwrap_err();
        assert_eq!(
            err,
            ShapeError::DimensionMismatch {
                op: "multiply",
                left: (1, 3),
                right: (2, 1),
            }
        );
    }

    #[test]
    fn combine_rejects_shape_mismatch() {
        let a = matrix(vec![vec![1.0, 2.0]]);
        let b = matrix(vec![vec![1.0], vec![2.0]]);
        assert!(matches!(
            a.add(&b),
            Err(ShapeError::DimensionMismatch { op: "combine", .. })
        ));
    }

    #[test]
    fn elementwise_wrappers_compute_expected_values() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(vec![vec![0.5, 1.0], vec![2.0, -1.0]]);

        assert_eq!(
            a.add(&b).unwrap(),
            matrix(vec![vec![1.5, 3.0], vec![5.0, 3.0]])
        );
        assert_eq!(
            a.sub(&b).unwrap(),
            matrix(vec![vec![0.5, 1.0], vec![1.0, 5.0]])
        );
        assert_eq!(
            a.hadamard(&b).unwrap(),
            matrix(vec![vec![0.5, 2.0], vec![6.0, -4.0]])
        );
    }

    #[test]
    fn map_applies_to_every_entry() {
        let a = matrix(vec![vec![1.0, -2.0], vec![3.0, -4.0]]);
        let doubled = a.map(|x| x * 2.0);
        assert_eq!(doubled, matrix(vec![vec![2.0, -4.0], vec![6.0, -8.0]]));
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let a = Matrix::random(3, 4, 7);
        let b = Matrix::random(3, 4, 7);
        let c = Matrix::random(3, 4, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_values_stay_inside_the_unit_interval() {
        let m = Matrix::random(10, 10, 42);
        for row in m.data() {
            for &value in row {
                assert!((-1.0..1.0).contains(&value));
            }
        }
    }

    #[test]
    fn display_lays_rows_out_one_per_line() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");

        let single = matrix(vec![vec![0.5]]);
        assert_eq!(single.to_string(), "[[0.5]]");
    }
}
