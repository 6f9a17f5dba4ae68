//! # Staffee Models
//!
//! Data structures exchanged with the remote backend and the browser.
//! None of these are persisted by the gateway.
//!
//! - [`auth`]: login, signup, OTP and password-reset payloads
//! - [`identity`]: the identity record kept in the identity cache
//! - [`otp`]: one-time-password input normalisation
//! - [`profiles`]: candidate and employer profiles, completion scoring
//! - [`jobs`]: jobs, status toggling, applications, contracts
//! - [`blogs`]: blog posts
//! - [`ai`]: AI content generation prompts and results
//! - [`contact`]: contact-form submissions

pub mod ai;
pub mod auth;
pub mod blogs;
pub mod contact;
pub mod identity;
pub mod jobs;
pub mod otp;
pub mod profiles;

pub use identity::CachedIdentity;
pub use otp::OtpCode;
pub use staffee_auth::Role;
