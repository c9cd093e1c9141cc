use std::f64::consts::E;

/// The logistic activation. Associated functions only; carry it across a
/// whole matrix with `Matrix::map`.
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^-x). Extreme inputs saturate toward 0 or 1
    /// through ordinary f64 arithmetic; there is no special handling.
    pub fn activate(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// Derivative expressed in terms of the activation output:
    /// σ'(x) = y · (1 - y) where y = σ(x).
    ///
    /// Callers must pass the already-activated value, never the raw
    /// pre-activation state; feeding the weighted sum here produces a
    /// wrong gradient, not an alternate formulation.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(Sigmoid::activate(0.0), 0.5);
    }

    #[test]
    fn sigmoid_stays_inside_the_open_unit_interval() {
        for x in [-30.0, -4.0, -0.5, 0.25, 3.0, 30.0] {
            let y = Sigmoid::activate(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn sigmoid_is_monotonically_increasing() {
        let xs = [-5.0, -1.0, -0.1, 0.0, 0.1, 1.0, 5.0];
        for pair in xs.windows(2) {
            assert!(Sigmoid::activate(pair[0]) < Sigmoid::activate(pair[1]));
        }
    }

    #[test]
    fn sigmoid_saturates_at_the_extremes() {
        assert_eq!(Sigmoid::activate(1000.0), 1.0);
        assert_eq!(Sigmoid::activate(-1000.0), 0.0);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(Sigmoid::derivative_from_output(0.5), 0.25);
        for y in [0.0, 0.1, 0.3, 0.7, 0.9, 1.0] {
            assert!(Sigmoid::derivative_from_output(y) <= 0.25);
        }
    }

    #[test]
    fn derivative_is_nonnegative_on_the_unit_interval() {
        let mut y = 0.0;
        while y <= 1.0 {
            assert!(Sigmoid::derivative_from_output(y) >= 0.0);
            y += 0.05;
        }
    }

    #[test]
    fn derivative_matches_its_closed_form() {
        assert_eq!(Sigmoid::derivative_from_output(0.2), 0.2 * 0.8);
        assert_eq!(Sigmoid::derivative_from_output(0.9), 0.9 * (1.0 - 0.9));
    }
}
