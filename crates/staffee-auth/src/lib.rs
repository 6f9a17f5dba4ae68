//! # Staffee Auth
//!
//! The session gate's building blocks.
//!
//! - [`claims`]: [`Role`] and the [`SessionClaims`] payload
//! - [`session`]: signing and verifying session tokens
//! - [`cookie`]: storing the token in the `session` cookie
//!
//! # Example
//!
//! ```ignore
//! use axum_extra::extract::CookieJar;
//! use staffee_auth::{Role, create_session, read_session};
//! use staffee_config::SessionConfig;
//!
//! let config = SessionConfig::from_env();
//! let (jar, claims) = create_session(CookieJar::new(), "u1", Role::Candidate, &config)?;
//!
//! let session = read_session(&jar, &config).unwrap();
//! assert_eq!(session.user_id, "u1");
//! ```

pub mod claims;
pub mod cookie;
pub mod session;

pub use claims::{Role, SessionClaims};
pub use cookie::{SESSION_COOKIE, create_session, delete_session, read_session};
pub use session::{create_session_token, decrypt, encrypt};
