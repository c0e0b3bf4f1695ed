// Domain errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("series has {categories} categories but {values} values")]
    SeriesLengthMismatch { categories: usize, values: usize },

    #[error("series must contain at least one category")]
    EmptySeries,

    #[error("invalid y range: min {min} must be below max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid bind address {0}")]
    InvalidAddress(String),
}
