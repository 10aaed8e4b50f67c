//! Forecast engine — model fitting and horizon prediction.

pub mod engine;
pub mod model;

pub use engine::{forecast, ForecastError};
pub use model::{FittedModel, TrainingFrame};
