// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OtpError {
    #[error("Invalid code length: {0} (must be 1..=9 digits)")]
    InvalidCodeLength(u32),

    #[error("Resend throttled, retry in {retry_after_secs}s")]
    ResendThrottled { retry_after_secs: i64 },

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl OtpError {
    pub fn delivery(msg: impl Into<String>) -> Self {
        OtpError::Delivery(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, OtpError>;
