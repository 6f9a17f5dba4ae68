//! The `session` cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration as TimeDuration;

use staffee_config::SessionConfig;
use staffee_core::AppError;

use crate::claims::{Role, SessionClaims};
use crate::session::{create_session_token, decrypt};

/// Session cookie name.
pub const SESSION_COOKIE: &str = "session";

/// Signs a new session for `user_id` and adds it to `jar` as an HTTP-only
/// cookie that lives as long as the token.
pub fn create_session(
    jar: CookieJar,
    user_id: &str,
    role: Role,
    config: &SessionConfig,
) -> Result<(CookieJar, SessionClaims), AppError> {
    let (token, claims) = create_session_token(user_id, role, config)?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::seconds(config.expiry_seconds));

    Ok((jar.add(cookie), claims))
}

/// Decodes the session carried by `jar`, if any.
pub fn read_session(jar: &CookieJar, config: &SessionConfig) -> Option<SessionClaims> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| decrypt(cookie.value(), config))
}

/// Overwrites the session cookie with an empty, already-expired one carrying
/// the same attributes `create_session` sets.
pub fn delete_session(jar: CookieJar, config: &SessionConfig) -> CookieJar {
    let remove_session = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::ZERO);

    jar.add(remove_session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_session_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            expiry_seconds: 30 * 24 * 60 * 60,
            cookie_secure: true,
        }
    }

    #[test]
    fn test_create_session_sets_protected_cookie() {
        let config = get_test_session_config();
        let (jar, _) = create_session(CookieJar::new(), "u1", Role::Candidate, &config).unwrap();

        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(TimeDuration::days(30)));
    }

    #[test]
    fn test_read_session_after_create() {
        let config = get_test_session_config();
        let (jar, issued) =
            create_session(CookieJar::new(), "u1", Role::Candidate, &config).unwrap();

        let claims = read_session(&jar, &config).unwrap();
        assert_eq!(claims.user_id, "u1");
        assert_eq!(claims.role, Role::Candidate);
        assert_eq!(claims.exp, issued.exp);
    }

    #[test]
    fn test_read_session_without_cookie_is_none() {
        let config = get_test_session_config();
        assert!(read_session(&CookieJar::new(), &config).is_none());
    }

    #[test]
    fn test_read_session_with_tampered_cookie_is_none() {
        let config = get_test_session_config();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "tampered.value.here"));
        assert!(read_session(&jar, &config).is_none());
    }

    #[test]
    fn test_delete_session_clears_cookie() {
        let config = get_test_session_config();
        let (jar, _) = create_session(CookieJar::new(), "u1", Role::Employer, &config).unwrap();

        let jar = delete_session(jar, &config);
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(TimeDuration::ZERO));
        assert!(read_session(&jar, &config).is_none());
    }

    #[test]
    fn test_removal_cookie_mirrors_session_attributes() {
        for cookie_secure in [true, false] {
            let config = SessionConfig {
                cookie_secure,
                ..get_test_session_config()
            };
            let (jar, _) =
                create_session(CookieJar::new(), "u1", Role::Candidate, &config).unwrap();
            let issued = jar.get(SESSION_COOKIE).unwrap().clone();

            let jar = delete_session(jar, &config);
            let removal = jar.get(SESSION_COOKIE).unwrap();
            assert_eq!(removal.path(), issued.path());
            assert_eq!(removal.http_only(), issued.http_only());
            assert_eq!(removal.secure(), issued.secure());
            assert_eq!(removal.same_site(), issued.same_site());
        }
    }
}
