//! Order Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("invalid items: {0}")]
    InvalidItems(&'static str),

    #[error("invalid total: {0}")]
    InvalidTotal(&'static str),

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}
