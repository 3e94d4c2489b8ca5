use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A code that has been dispatched to a phone number and not yet
/// verified or expired.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PendingOtp {
    pub code: String,              // digit string
    pub attempts: i32,             // Failed attempts
    pub expires_at: DateTime<Utc>, // When the code expires
    pub last_sent_at: DateTime<Utc>, // Gates resend requests
    pub created_at: DateTime<Utc>, // When the code was issued
}
