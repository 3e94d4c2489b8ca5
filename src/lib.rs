//! One-time-passcode issuance, verification, and resend throttling for
//! phone contact verification.
//!
//! The building blocks are free functions — [`generate_code`],
//! [`add_seconds`], [`can_resend`] — and [`VerificationService`] ties
//! them together: it issues a code, dispatches it through an
//! [`OtpSender`], refuses resends inside a 30-second window, and checks
//! submissions against an expiry and an attempt budget. The bundled
//! [`SmsService`] is a logging stub; production callers implement
//! `OtpSender` against their gateway.
//!
//! ```no_run
//! use std::sync::Arc;
//! use contact_verify::{OtpConfig, SmsService, VerificationService};
//!
//! # async fn demo() {
//! let service = VerificationService::new(
//!     OtpConfig::from_env(),
//!     Arc::new(SmsService::new("Dashboard".to_string())),
//! );
//!
//! service.request_code("+254712345678").await.unwrap();
//! // ...user reads the code off their phone...
//! let ok = service.verify("+254712345678", "123456");
//! # let _ = ok;
//! # }
//! ```

mod config;
mod errors;
mod models;
mod services;

pub use config::OtpConfig;
pub use errors::{OtpError, Result};
pub use models::otp::PendingOtp;
pub use services::otp_service::{
    add_seconds, can_resend, can_resend_at, generate_code, VerificationService,
    RESEND_INTERVAL_SECS,
};
pub use services::sms_service::{OtpSender, SmsService};
