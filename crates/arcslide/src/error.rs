use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("{value} is out of range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfig),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidConfig {
    #[error("minimum value {min} must be below maximum value {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("maximum angle {0} must be greater than 0")]
    MaxAngle(f64),
    #[error("line width {0} must be a positive number")]
    LineWidth(f64),
    #[error("inner marking labels need at least 2 entries, got {0}")]
    TooFewLabels(usize),
    #[error("label displacement {0} is not a finite number")]
    LabelDisplacement(f64),
}
