//! # Staffee Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`session`]: session cookie signing and lifetime
//! - [`backend`]: remote REST backend location
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`email`]: SMTP settings for the contact-form mailer
//! - [`media`]: image host used for profile photos and company logos
//! - [`server`]: listen address and public URL
//!
//! # Example
//!
//! ```ignore
//! use staffee_config::{BackendConfig, SessionConfig};
//!
//! let session_config = SessionConfig::from_env();
//! let backend_config = BackendConfig::from_env();
//! ```

pub mod backend;
pub mod cors;
pub mod email;
pub mod media;
pub mod server;
pub mod session;

pub use backend::BackendConfig;
pub use cors::CorsConfig;
pub use email::EmailConfig;
pub use media::MediaConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
