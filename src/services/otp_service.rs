use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::OtpConfig;
use crate::errors::{OtpError, Result};
use crate::models::otp::PendingOtp;
use crate::services::sms_service::OtpSender;

/// Minimum interval between dispatches to the same phone number.
pub const RESEND_INTERVAL_SECS: i64 = 30;

/// Generate a random code of exactly `len` digits, uniform over
/// `10^(len-1)..=10^len - 1` (no leading zeros).
///
/// Lengths outside `1..=9` are rejected; 10 digits would overflow the
/// u32 sample range.
pub fn generate_code(len: u32) -> Result<String> {
    if len == 0 || len > 9 {
        return Err(OtpError::InvalidCodeLength(len));
    }

    let lo = 10u32.pow(len - 1);
    let hi = 10u32.pow(len);

    let mut rng = rand::thread_rng();
    Ok(rng.gen_range(lo..hi).to_string())
}

/// Offset `base` forward by a whole number of seconds.
pub fn add_seconds(base: DateTime<Utc>, secs: u32) -> DateTime<Utc> {
    base + Duration::seconds(i64::from(secs))
}

/// Resend decision against an explicit clock. Strictly more than 30
/// seconds must have elapsed; at exactly 30.000s the resend is still
/// refused.
pub fn can_resend_at(last_sent: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(last_sent) > Duration::seconds(RESEND_INTERVAL_SECS)
}

/// Resend decision against the wall clock. The caller records the new
/// last-sent timestamp itself once a resend goes through.
pub fn can_resend(last_sent: DateTime<Utc>) -> bool {
    can_resend_at(last_sent, Utc::now())
}

/// Issues codes, throttles resends, and checks submissions. Pending
/// codes are keyed by phone number and held in memory; they are
/// ephemeral and never outlive the process.
pub struct VerificationService {
    config: OtpConfig,
    sender: Arc<dyn OtpSender>,
    pending: Mutex<HashMap<String, PendingOtp>>,
}

impl VerificationService {
    pub fn new(config: OtpConfig, sender: Arc<dyn OtpSender>) -> Self {
        Self {
            config,
            sender,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Generate a fresh code for `phone` and hand it to the sender.
    /// Refused with `ResendThrottled` while the previous dispatch is
    /// inside the 30-second window. Returns the code's expiry on
    /// success.
    pub async fn request_code(&self, phone: &str) -> Result<DateTime<Utc>> {
        let now = Utc::now();

        {
            let pending = self.pending.lock().unwrap();
            if let Some(entry) = pending.get(phone) {
                if !can_resend_at(entry.last_sent_at, now) {
                    let elapsed = now.signed_duration_since(entry.last_sent_at).num_seconds();
                    let retry_after_secs = (RESEND_INTERVAL_SECS - elapsed).max(0);
                    tracing::warn!(phone, retry_after_secs, "resend throttled");
                    return Err(OtpError::ResendThrottled { retry_after_secs });
                }
            }
        }

        let code = generate_code(self.config.code_length)?;
        let expires_at = add_seconds(now, self.config.ttl_secs);

        {
            let mut pending = self.pending.lock().unwrap();
            pending.insert(
                phone.to_string(),
                PendingOtp {
                    code: code.clone(),
                    attempts: 0,
                    expires_at,
                    last_sent_at: now,
                    created_at: now,
                },
            );
        }

        self.sender.send_otp(phone, &code).await?;

        Ok(expires_at)
    }

    /// Check a submitted code. True only when it matches the pending
    /// code, the attempt budget is not exhausted, and the expiry is in
    /// the future. The pending entry is cleared on success; a failure
    /// consumes an attempt.
    pub fn verify(&self, phone: &str, code: &str) -> bool {
        let now = Utc::now();
        let mut pending = self.pending.lock().unwrap();

        let Some(entry) = pending.get_mut(phone) else {
            return false;
        };

        if entry.code == code
            && entry.attempts < self.config.max_attempts
            && entry.expires_at > now
        {
            pending.remove(phone);
            true
        } else {
            entry.attempts += 1;
            false
        }
    }
}
