use thiserror::Error;

/// Rejected agent configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A hyperparameter lies outside its documented interval (or is NaN)
    #[error("Invalid value for `{name}`: {value}. Must be in the interval {interval}.")]
    OutOfRange {
        name: &'static str,
        value: f32,
        interval: String,
    },
}
