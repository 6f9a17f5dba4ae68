//! # Staffee Core
//!
//! Foundational types shared by every Staffee crate.
//!
//! - [`errors`]: the application error type and its HTTP rendering
//!
//! # Example
//!
//! ```ignore
//! use staffee_core::AppError;
//!
//! let error = AppError::unauthorized("Session required".to_string());
//! assert_eq!(error.status, axum::http::StatusCode::UNAUTHORIZED);
//! ```

pub mod errors;

pub use errors::AppError;
