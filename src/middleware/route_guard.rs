//! Session-driven page redirects.
//!
//! A request is either anonymous or authenticated with a role. The guard
//! decides from the path and that state alone:
//!
//! | state | public path | protected, allowed | protected, not allowed |
//! |---|---|---|---|
//! | anonymous | allow | redirect `/login` | redirect `/login` |
//! | authenticated | redirect home | allow | redirect home |
//!
//! Paths under a bypass prefix are never classified.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use tracing::debug;

use staffee_auth::{Role, read_session};

use crate::metrics::track_guard_redirect;
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    /// Reachable only while signed out.
    pub public: Vec<String>,
    /// Handled elsewhere (API, docs, probes).
    pub bypass: Vec<String>,
    pub candidate: Vec<String>,
    pub employer: Vec<String>,
    pub login_path: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        let owned = |paths: &[&str]| paths.iter().map(|p| p.to_string()).collect();

        Self {
            public: owned(&["/login", "/signup"]),
            bypass: owned(&["/api", "/scalar", "/docs", "/metrics", "/health"]),
            candidate: owned(&[Role::Candidate.home_path()]),
            employer: owned(&[Role::Employer.home_path()]),
            login_path: "/login".to_string(),
        }
    }
}

impl RouteTable {
    pub fn allowed_for(&self, role: Role) -> &[String] {
        match role {
            Role::Candidate => &self.candidate,
            Role::Employer => &self.employer,
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public.iter().any(|p| matches_prefix(path, p))
    }

    pub fn is_bypassed(&self, path: &str) -> bool {
        self.bypass.iter().any(|p| matches_prefix(path, p))
    }
}

/// Segment-aware prefix test: `/candidate` matches `/candidate` and
/// `/candidate/jobs`, never `/candidates`.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

pub fn classify(path: &str, role: Option<Role>, table: &RouteTable) -> RouteDecision {
    if table.is_bypassed(path) {
        return RouteDecision::Allow;
    }

    let public = table.is_public(path);

    match role {
        None if public => RouteDecision::Allow,
        None => RouteDecision::Redirect(table.login_path.clone()),
        Some(role) if public => RouteDecision::Redirect(role.home_path().to_string()),
        Some(role)
            if table
                .allowed_for(role)
                .iter()
                .any(|prefix| matches_prefix(path, prefix)) =>
        {
            RouteDecision::Allow
        }
        Some(role) => RouteDecision::Redirect(role.home_path().to_string()),
    }
}

pub async fn route_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let role = read_session(&jar, &state.session_config).map(|session| session.role);

    match classify(req.uri().path(), role, &state.routes) {
        RouteDecision::Allow => next.run(req).await,
        RouteDecision::Redirect(target) => {
            debug!(
                path = %req.uri().path(),
                role = role.map_or("anonymous", |r| r.as_str()),
                target = %target,
                "Route guard redirect"
            );
            track_guard_redirect(role, &target);
            Redirect::temporary(&target).into_response()
        }
    }
}
