use tracing::warn;

use staffee_auth::{Role, SessionClaims};
use staffee_models::CachedIdentity;

use crate::state::AppState;
use crate::utils::html::{escape, layout};

pub const VERIFY_EMAIL_SECTION_ID: &str = "verify-email";

pub struct PageService;

impl PageService {
    /// A store failure reads as "nothing cached"; the page still renders.
    pub async fn cached_identity(state: &AppState, user_id: &str) -> Option<CachedIdentity> {
        state
            .identity_cache
            .get(user_id)
            .await
            .inspect_err(|e| warn!(error = %e, "Identity cache unavailable"))
            .ok()
            .flatten()
    }

    pub fn render_login() -> String {
        layout(
            "Sign in",
            r#"        <h1>Sign in</h1>
        <form id="login-form" data-endpoint="/api/auth/login">
            <label>Email <input type="email" name="email" required></label>
            <label>Password <input type="password" name="password" required></label>
            <button type="submit">Sign in</button>
        </form>
        <p><a href="/signup">Create an account</a></p>"#,
        )
    }

    pub fn render_signup() -> String {
        layout(
            "Create an account",
            r#"        <h1>Create an account</h1>
        <form id="signup-form" data-endpoint="/api/auth/signup">
            <label>Name <input type="text" name="name" required></label>
            <label>Username <input type="text" name="username" required></label>
            <label>Email <input type="email" name="email" required></label>
            <label>Password <input type="password" name="password" minlength="8" required></label>
            <label>I am a
                <select name="role">
                    <option value="candidate">Candidate looking for work</option>
                    <option value="employer">Employer hiring talent</option>
                </select>
            </label>
            <button type="submit">Sign up</button>
        </form>
        <p><a href="/login">Already have an account?</a></p>"#,
        )
    }

    /// The verification prompt shows only when the cached identity is known
    /// to be unverified.
    pub fn render_dashboard(session: &SessionClaims, identity: Option<&CachedIdentity>) -> String {
        let name = identity.map_or(session.user_id.as_str(), |i| i.name.as_str());

        let prompt = match identity {
            Some(identity) if identity.needs_email_verification() => format!(
                r#"        <section id="{VERIFY_EMAIL_SECTION_ID}">
            <p>We sent a verification code to {email}.</p>
            <form data-endpoint="/api/auth/verify-otp">
                <input type="hidden" name="email" value="{email}">
                <label>Code <input type="text" name="otp" inputmode="numeric" autocomplete="one-time-code" required></label>
                <button type="submit">Verify</button>
            </form>
            <form data-endpoint="/api/auth/resend-otp">
                <input type="hidden" name="email" value="{email}">
                <button type="submit">Resend code</button>
            </form>
        </section>
"#,
                email = escape(&identity.email),
            ),
            _ => String::new(),
        };

        // Each nav entry is a dashboard section the page script fills from
        // its `data-endpoint`.
        let (title, sections): (&str, &[(&str, &str, &str)]) = match session.role {
            Role::Candidate => (
                "Candidate dashboard",
                &[
                    ("jobs", "Browse jobs", "/api/jobs?status=open"),
                    ("applications", "My applications", "/api/applications"),
                ],
            ),
            Role::Employer => (
                "Employer dashboard",
                &[
                    ("jobs", "My jobs", "/api/jobs"),
                    ("blogs", "Blog", "/api/blogs"),
                ],
            ),
        };

        let links = sections
            .iter()
            .map(|(id, label, _)| format!(r##"<a href="#{id}">{label}</a>"##))
            .collect::<Vec<_>>()
            .join(" ");
        let panels: String = sections
            .iter()
            .map(|(id, label, endpoint)| {
                format!(
                    "        <section id=\"{id}\" data-endpoint=\"{endpoint}\"><h2>{label}</h2></section>\n"
                )
            })
            .collect();

        let body = format!(
            r#"        <h1>Welcome, {name}</h1>
{prompt}        <nav>{links}</nav>
{panels}        <form method="post" action="/api/auth/logout"><button type="submit">Sign out</button></form>"#,
            name = escape(name),
        );

        layout(title, &body)
    }

    pub fn render_not_found(path: &str) -> String {
        layout(
            "Page not found",
            &format!(
                "        <h1>Page not found</h1>\n        <p>Nothing lives at <code>{}</code>.</p>",
                escape(path)
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> SessionClaims {
        SessionClaims {
            user_id: "u1".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    fn identity(verify_email: Option<bool>) -> CachedIdentity {
        CachedIdentity {
            id: "u1".to_string(),
            name: "Jane <Doe>".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            role: Role::Candidate,
            verify_email,
        }
    }

    #[test]
    fn test_prompt_shown_for_unverified_identity() {
        let html = PageService::render_dashboard(&session(Role::Candidate), Some(&identity(Some(false))));
        assert!(html.contains(VERIFY_EMAIL_SECTION_ID));
        assert!(html.contains("Welcome, Jane &lt;Doe&gt;"));
    }

    #[test]
    fn test_prompt_hidden_when_verified_or_unknown() {
        let session = session(Role::Candidate);
        for identity in [Some(identity(Some(true))), Some(identity(None)), None] {
            let html = PageService::render_dashboard(&session, identity.as_ref());
            assert!(!html.contains(VERIFY_EMAIL_SECTION_ID));
        }
    }

    #[test]
    fn test_dashboard_links_stay_on_the_page() {
        for role in [Role::Candidate, Role::Employer] {
            let html = PageService::render_dashboard(&session(role), None);
            assert!(!html.contains(r#"href="/api"#), "{}", role);
            assert!(html.contains(r##"<a href="#jobs">"##));
            assert!(html.contains(r#"<section id="jobs" data-endpoint="/api/jobs"#));
            assert!(html.contains(r#"<form method="post" action="/api/auth/logout">"#));
        }
    }

    #[test]
    fn test_dashboard_falls_back_to_user_id() {
        let html = PageService::render_dashboard(&session(Role::Employer), None);
        assert!(html.contains("Welcome, u1"));
        assert!(html.contains("Employer dashboard"));
    }
}
