pub mod perceptron;

pub use perceptron::{Forward, Perceptron};
