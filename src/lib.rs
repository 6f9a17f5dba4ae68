//! # Staffee
//!
//! Web gateway for Staffee, a recruitment platform connecting job
//! candidates with employers. A separate REST backend owns all business
//! data; this crate owns the session gate in front of it.
//!
//! ## Overview
//!
//! - **Sessions**: a signed HS256 token in the HTTP-only `session` cookie,
//!   carrying the user id, role and a 30-day expiry
//! - **Route guard**: every page request is classified as anonymous or
//!   authenticated-with-role and redirected to `/login` or the role's
//!   dashboard when it doesn't belong
//! - **Identity cache**: a 3-day mirror of the signed-in user used only to
//!   decide whether dashboards show the email-verification prompt
//! - **API**: `/api/...` JSON endpoints forwarding to the backend under the
//!   caller's session
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── staffee-core/     # AppError
//! ├── staffee-config/   # *Config::from_env()
//! ├── staffee-auth/     # Role, session claims, token codec, cookie
//! ├── staffee-models/   # DTOs, OTP and profile-completion logic
//! ├── staffee-cache/    # IdentityCache over memory or Redis
//! └── staffee-client/   # BackendClient (reqwest)
//! src/
//! ├── middleware/       # route guard, session extractors
//! ├── modules/          # feature modules
//! └── utils/            # mailer, HTML shell, backend error mapping
//! ```
//!
//! Each feature module has a `controller.rs` (handlers), a `service.rs`
//! (calls into the backend and cache) and a `router.rs`.
//!
//! ## Roles
//!
//! | Role | Home | Pages |
//! |------|------|-------|
//! | Candidate | `/candidate` | `/candidate/...` |
//! | Employer | `/employer` | `/employer/...` |
//!
//! ## Environment Variables
//!
//! ```bash
//! SESSION_SECRET=your-secure-secret-key
//! BACKEND_URL=http://localhost:8000/api
//! REDIS_URL=redis://localhost:6379   # optional, memory otherwise
//! ```
//!
//! API documentation is served at `/scalar` while the server runs.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

pub use staffee_auth;
pub use staffee_cache;
pub use staffee_client;
pub use staffee_config;
pub use staffee_core;
pub use staffee_models;
