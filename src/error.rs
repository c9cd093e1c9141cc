use std::fmt;

/// Dimensional precondition failure in a matrix operation.
///
/// Raised when operands violate the shape contracts: a non-rectangular or
/// empty row set at construction, an inner-dimension mismatch in a product,
/// or a whole-shape mismatch in an elementwise combine. These indicate a
/// programming error in the caller, not a recoverable runtime condition;
/// nothing in this crate catches or retries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The row set had zero rows, or the first row had zero columns.
    EmptyMatrix { op: &'static str },
    /// Row `row` has a different length than row 0.
    RaggedRow {
        op: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The two operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EmptyMatrix { op } => {
                write!(f, "{op}: matrix needs at least one row and one column")
            }
            ShapeError::RaggedRow {
                op,
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{op}: row {row} has {actual} columns, expected {expected}"
                )
            }
            ShapeError::DimensionMismatch { op, left, right } => {
                write!(
                    f,
                    "{op}: incompatible shapes {}x{} and {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_names_operation_and_shapes() {
        let err = ShapeError::DimensionMismatch {
            op: "multiply",
            left: (2, 3),
            right: (4, 5),
        };
        let msg = err.to_string();
        assert!(msg.contains("multiply"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("4x5"));
    }

    #[test]
    fn ragged_row_names_offending_row() {
        let err = ShapeError::RaggedRow {
            op: "from_rows",
            row: 2,
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("from_rows"));
        assert!(msg.contains("row 2"));
        assert!(msg.contains("3 columns"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn empty_matrix_names_operation() {
        let err = ShapeError::EmptyMatrix { op: "from_rows" };
        assert!(err.to_string().contains("from_rows"));
    }
}
