use async_trait::async_trait;

use crate::errors::Result;

/// Outbound channel for one-time codes. The verification service only
/// depends on this trait, so tests can substitute a recording sender.
#[async_trait]
pub trait OtpSender: Send + Sync {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<()>;
}

/// Placeholder SMS dispatcher. Logs the intent and reports success
/// without contacting any gateway; wiring in a real SMS/voice provider
/// replaces this implementation.
#[derive(Clone)]
pub struct SmsService {
    from: String,
}

impl SmsService {
    pub fn new(from: String) -> Self {
        Self { from }
    }
}

#[async_trait]
impl OtpSender for SmsService {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<()> {
        // Gateway call not yet implemented.
        tracing::info!(
            phone,
            from = %self.from,
            code_len = code.len(),
            "would send verification code"
        );
        Ok(())
    }
}
