//! # Staffee Client
//!
//! Thin, typed wrappers over the backend's JSON API. The backend owns all
//! business data; this crate only moves JSON in and out.
//!
//! Calls are independent: no retries, no ordering, the HTTP client's
//! default timeouts. A failed call surfaces once as a [`ClientError`].
//!
//! - [`client`]: [`BackendClient`] and its request plumbing
//! - [`error`]: [`ClientError`] and its mapping onto `AppError`
//! - [`auth`], [`profiles`], [`jobs`], [`blogs`], [`ai`]: one method per
//!   backend operation

pub mod ai;
pub mod auth;
pub mod blogs;
pub mod client;
pub mod error;
pub mod jobs;
pub mod profiles;

pub use client::{BackendClient, USER_HEADER};
pub use error::ClientError;
