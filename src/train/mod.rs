pub mod train_config;
pub mod trainer;

pub use train_config::{TrainConfig, DEFAULT_EPOCHS};
pub use trainer::Trainer;
