pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::Sigmoid;
pub use error::{Result, ShapeError};
pub use layers::perceptron::{Forward, Perceptron};
pub use loss::mse::MseLoss;
pub use math::matrix::Matrix;
pub use train::train_config::TrainConfig;
pub use train::trainer::Trainer;
