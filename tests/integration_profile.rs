mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use staffee_auth::Role;

use common::{
    CANDIDATE_ID, EMPLOYER_ID, body_json, get_request, json_request, session_cookie,
    setup_test_app,
};

#[tokio::test]
async fn test_candidate_profile_uses_session_identity() {
    let app = setup_test_app().await;
    let cookie = session_cookie(CANDIDATE_ID, Role::Candidate);

    let response = app
        .router
        .oneshot(get_request("/api/profile", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], CANDIDATE_ID);
    assert_eq!(body["headline"], "Backend engineer");
    assert_eq!(
        body["photo"],
        "https://res.cloudinary.com/demo/image/upload/avatars/jane.png"
    );
}

#[tokio::test]
async fn test_employer_profile_by_role() {
    let app = setup_test_app().await;
    let cookie = session_cookie(EMPLOYER_ID, Role::Employer);

    let response = app
        .router
        .oneshot(get_request("/api/profile", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["companyName"], "Acme");
    assert_eq!(
        body["logo"],
        "https://res.cloudinary.com/demo/image/upload/logos/acme.png"
    );
}

#[tokio::test]
async fn test_profile_requires_session() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(get_request("/api/profile", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_profile_is_not_found() {
    let app = setup_test_app().await;
    let cookie = session_cookie("cand-new", Role::Candidate);

    let response = app
        .router
        .oneshot(get_request("/api/profile", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_completion() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(get_request(
            "/api/profile/completion",
            Some(&session_cookie(CANDIDATE_ID, Role::Candidate)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // name, email, headline, skills, photo of 11 fields
    assert_eq!(body["percentage"], 45);
    assert!(body["missing"].as_array().unwrap().contains(&json!("resumeUrl")));

    let response = app
        .router
        .oneshot(get_request(
            "/api/profile/completion",
            Some(&session_cookie(EMPLOYER_ID, Role::Employer)),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["percentage"], 44);
}

#[tokio::test]
async fn test_update_candidate_profile() {
    let app = setup_test_app().await;
    let cookie = session_cookie(CANDIDATE_ID, Role::Candidate);

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/profile",
            Some(&cookie),
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "bio": "I build APIs.",
                "resumeUrl": "https://example.com/cv.pdf",
                "experience": [{ "title": "Engineer", "company": "Acme" }]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["bio"], "I build APIs.");
    assert_eq!(body["experience"][0]["company"], "Acme");

    let stored = app.backend.lock().unwrap().candidates[CANDIDATE_ID].clone();
    assert_eq!(stored["resumeUrl"], "https://example.com/cv.pdf");
}

#[tokio::test]
async fn test_update_profile_validates_by_role() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/profile",
            Some(&session_cookie(CANDIDATE_ID, Role::Candidate)),
            json!({ "email": "not-an-email" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .router
        .oneshot(json_request(
            "PUT",
            "/api/profile",
            Some(&session_cookie(EMPLOYER_ID, Role::Employer)),
            json!({ "website": "acme" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
