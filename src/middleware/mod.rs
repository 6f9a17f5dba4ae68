//! Request gating.
//!
//! # Modules
//!
//! - [`route_guard`]: page-level redirects driven by the session cookie
//! - [`auth`]: session extractors for API handlers
//!
//! Pages and API routes are gated differently. A page request without the
//! right session is redirected by [`route_guard::route_guard`] before any
//! handler runs. API paths bypass the guard; their handlers take
//! [`auth::SessionUser`], [`auth::RequireCandidate`] or
//! [`auth::RequireEmployer`] and answer `401`/`403` JSON instead.
//!
//! ```ignore
//! use crate::middleware::auth::RequireEmployer;
//!
//! async fn create_job(RequireEmployer(user): RequireEmployer) -> impl IntoResponse {
//!     // Only runs for a valid employer session
//! }
//! ```

pub mod auth;
pub mod route_guard;
