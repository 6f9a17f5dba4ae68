use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use staffee_auth::{
    Role, SESSION_COOKIE, SessionClaims, create_session, create_session_token, decrypt,
    delete_session, read_session,
};
use staffee_config::SessionConfig;

fn get_test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        expiry_seconds: 30 * 24 * 60 * 60,
        cookie_secure: true,
    }
}

#[test]
fn test_every_role_survives_the_cookie() {
    let config = get_test_session_config();

    for (user_id, role) in [("c-1", Role::Candidate), ("e-1", Role::Employer)] {
        let (jar, _) = create_session(CookieJar::new(), user_id, role, &config).unwrap();

        // Re-read as a browser would send it back.
        let value = jar.get(SESSION_COOKIE).unwrap().value().to_string();
        let incoming = CookieJar::new().add(Cookie::new(SESSION_COOKIE, value));

        let claims = read_session(&incoming, &config).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_expiry_matches_configured_lifetime() {
    let config = SessionConfig {
        expiry_seconds: 60,
        ..get_test_session_config()
    };

    let (token, issued) = create_session_token("u1", Role::Candidate, &config).unwrap();
    assert_eq!(issued.exp - issued.iat, 60);

    let claims = decrypt(&token, &config).unwrap();
    assert_eq!(claims.expires_at().timestamp(), issued.exp as i64);
}

#[test]
fn test_token_from_leaked_secret_of_other_deployment_is_rejected() {
    let config = get_test_session_config();
    let now = Utc::now().timestamp() as usize;
    let claims = SessionClaims {
        user_id: "u1".to_string(),
        role: Role::Employer,
        exp: now + 3600,
        iat: now,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some-other-deployment-secret-value"),
    )
    .unwrap();
    assert!(decrypt(&token, &config).is_none());
}

#[test]
fn test_missing_claims_are_rejected() {
    let config = get_test_session_config();
    let now = Utc::now().timestamp() as usize;

    let token = encode(
        &Header::new(Algorithm::HS256),
        &serde_json::json!({ "role": "candidate", "exp": now + 3600, "iat": now }),
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap();
    assert!(decrypt(&token, &config).is_none());
}

#[test]
fn test_deleted_session_cannot_be_read() {
    let config = get_test_session_config();
    let (jar, _) = create_session(CookieJar::new(), "u1", Role::Candidate, &config).unwrap();

    let jar = delete_session(jar, &config);
    assert!(read_session(&jar, &config).is_none());
}
