// config.rs
use std::env;

/// Tunables for the verification flow. Defaults are the values the
/// production dispatch path uses: 6-digit codes valid for 5 minutes,
/// 3 verification attempts.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Number of digits in a generated code.
    pub code_length: u32,
    /// Seconds a code stays valid after dispatch.
    pub ttl_secs: u32,
    /// Failed verification attempts allowed before the code is burned.
    pub max_attempts: i32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        OtpConfig {
            code_length: 6,
            ttl_secs: 300,
            max_attempts: 3,
        }
    }
}

impl OtpConfig {
    pub fn from_env() -> Self {
        let defaults = OtpConfig::default();

        OtpConfig {
            code_length: env::var("OTP_CODE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_length),
            ttl_secs: env::var("OTP_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_secs),
            max_attempts: env::var("OTP_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
        }
    }
}
