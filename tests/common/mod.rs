//! Shared fixtures: an in-process stand-in for the REST backend and a
//! gateway wired to it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use staffee::middleware::route_guard::RouteTable;
use staffee::router::init_router;
use staffee::state::AppState;
use staffee_auth::{Role, SESSION_COOKIE, create_session_token};
use staffee_cache::{IdentityCache, MemoryStore};
use staffee_client::{BackendClient, USER_HEADER};
use staffee_config::{BackendConfig, CorsConfig, EmailConfig, MediaConfig, SessionConfig};

pub const PASSWORD: &str = "password123";
pub const VALID_OTP: &str = "123456";

pub const CANDIDATE_ID: &str = "cand-1";
pub const CANDIDATE_EMAIL: &str = "jane@example.com";
pub const EMPLOYER_ID: &str = "emp-1";
pub const EMPLOYER_EMAIL: &str = "hr@acme.com";
pub const OPEN_JOB_ID: &str = "job-1";

/// Everything the fake backend knows.
#[derive(Default)]
pub struct BackendData {
    /// (user, password)
    pub users: Vec<(Value, String)>,
    pub candidates: HashMap<String, Value>,
    pub employers: HashMap<String, Value>,
    pub jobs: HashMap<String, Value>,
    pub applications: Vec<Value>,
    pub blogs: HashMap<String, Value>,
    /// Codes received on `auth/verify-otp`, as sent.
    pub otp_submissions: Vec<String>,
    next_id: usize,
}

impl BackendData {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id + 100)
    }
}

pub type SharedBackend = Arc<Mutex<BackendData>>;

type Reply = (StatusCode, Json<Value>);

fn reply(status: StatusCode, body: Value) -> Reply {
    (status, Json(body))
}

fn message(status: StatusCode, text: &str) -> Reply {
    reply(status, json!({ "message": text }))
}

fn actor(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn seeded_data() -> BackendData {
    let mut data = BackendData::default();

    data.users.push((
        json!({
            "id": CANDIDATE_ID,
            "name": "Jane Doe",
            "username": "jane",
            "email": CANDIDATE_EMAIL,
            "role": "candidate",
            "verifyEmail": false
        }),
        PASSWORD.to_string(),
    ));
    data.users.push((
        json!({
            "id": EMPLOYER_ID,
            "name": "Acme Hiring",
            "username": "acme",
            "email": EMPLOYER_EMAIL,
            "role": "employer",
            "verifyEmail": true
        }),
        PASSWORD.to_string(),
    ));

    data.candidates.insert(
        CANDIDATE_ID.to_string(),
        json!({
            "id": CANDIDATE_ID,
            "name": "Jane Doe",
            "email": CANDIDATE_EMAIL,
            "headline": "Backend engineer",
            "skills": ["rust", "sql"],
            "photo": "avatars/jane.png"
        }),
    );
    data.employers.insert(
        EMPLOYER_ID.to_string(),
        json!({
            "id": EMPLOYER_ID,
            "companyName": "Acme",
            "email": EMPLOYER_EMAIL,
            "website": "https://acme.example.com",
            "logo": "logos/acme.png"
        }),
    );

    data.jobs.insert(
        OPEN_JOB_ID.to_string(),
        json!({
            "id": OPEN_JOB_ID,
            "employerId": EMPLOYER_ID,
            "title": "Rust Engineer",
            "description": "Build the matching engine",
            "location": "Lagos",
            "employmentType": "full-time",
            "skills": ["rust"],
            "status": "open"
        }),
    );
    data.jobs.insert(
        "job-2".to_string(),
        json!({
            "id": "job-2",
            "employerId": EMPLOYER_ID,
            "title": "Product Designer",
            "description": "Design the candidate dashboard",
            "status": "closed"
        }),
    );

    data
}

async fn login(State(db): State<SharedBackend>, Json(body): Json<Value>) -> Reply {
    let db = db.lock().unwrap();
    let found = db
        .users
        .iter()
        .find(|(user, password)| user["email"] == body["email"] && *password == body["password"]);

    match found {
        Some((user, _)) => reply(StatusCode::OK, json!({ "user": user })),
        None => message(StatusCode::UNAUTHORIZED, "Invalid email or password"),
    }
}

/// New users come back without `verifyEmail`, like the real backend.
async fn signup(State(db): State<SharedBackend>, Json(body): Json<Value>) -> Reply {
    let mut db = db.lock().unwrap();
    if db.users.iter().any(|(user, _)| user["email"] == body["email"]) {
        return message(StatusCode::BAD_REQUEST, "Email already registered");
    }

    let user = json!({
        "id": db.next_id("user"),
        "name": body["name"],
        "username": body["username"],
        "email": body["email"],
        "role": body["role"]
    });
    let password = body["password"].as_str().unwrap_or_default().to_string();
    db.users.push((user.clone(), password));

    reply(
        StatusCode::CREATED,
        json!({ "user": user, "message": "Account created" }),
    )
}

async fn verify_otp(State(db): State<SharedBackend>, Json(body): Json<Value>) -> Reply {
    let mut db = db.lock().unwrap();
    let otp = body["otp"].as_str().unwrap_or_default().to_string();
    db.otp_submissions.push(otp.clone());

    if otp == VALID_OTP {
        message(StatusCode::OK, "Email verified")
    } else {
        message(StatusCode::BAD_REQUEST, "Invalid or expired code")
    }
}

async fn ok_message() -> Reply {
    message(StatusCode::OK, "Done")
}

fn profiles<'a>(db: &'a mut BackendData, kind: &str) -> &'a mut HashMap<String, Value> {
    if kind == "candidates" {
        &mut db.candidates
    } else {
        &mut db.employers
    }
}

fn read_profile(db: &SharedBackend, kind: &str, id: &str, headers: &HeaderMap) -> Reply {
    if actor(headers).as_deref() != Some(id) {
        return message(StatusCode::FORBIDDEN, "Forbidden");
    }

    let mut db = db.lock().unwrap();
    match profiles(&mut db, kind).get(id) {
        Some(profile) => reply(StatusCode::OK, profile.clone()),
        None => message(StatusCode::NOT_FOUND, "Profile not found"),
    }
}

fn write_profile(
    db: &SharedBackend,
    kind: &str,
    id: String,
    headers: &HeaderMap,
    mut body: Value,
) -> Reply {
    if actor(headers).as_deref() != Some(id.as_str()) {
        return message(StatusCode::FORBIDDEN, "Forbidden");
    }

    body["id"] = json!(id);
    let mut db = db.lock().unwrap();
    profiles(&mut db, kind).insert(id, body.clone());
    reply(StatusCode::OK, body)
}

async fn get_candidate(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Reply {
    read_profile(&db, "candidates", &id, &headers)
}

async fn put_candidate(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    write_profile(&db, "candidates", id, &headers, body)
}

async fn get_employer(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Reply {
    read_profile(&db, "employers", &id, &headers)
}

async fn put_employer(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    write_profile(&db, "employers", id, &headers, body)
}

async fn list_jobs(
    State(db): State<SharedBackend>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    let db = db.lock().unwrap();
    let mut jobs: Vec<Value> = db
        .jobs
        .values()
        .filter(|job| {
            query
                .get("status")
                .is_none_or(|status| job["status"] == json!(status))
        })
        .filter(|job| {
            query.get("q").is_none_or(|q| {
                job["title"]
                    .as_str()
                    .is_some_and(|title| title.to_lowercase().contains(&q.to_lowercase()))
            })
        })
        .cloned()
        .collect();
    jobs.sort_by(|a, b| a["id"].as_str().cmp(&b["id"].as_str()));

    reply(StatusCode::OK, json!(jobs))
}

async fn create_job(
    State(db): State<SharedBackend>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Reply {
    if actor(&headers) != body["employerId"].as_str().map(str::to_string) {
        return message(StatusCode::FORBIDDEN, "Employer mismatch");
    }

    let mut db = db.lock().unwrap();
    let id = db.next_id("job");
    body["id"] = json!(id);
    body["status"] = json!("open");
    db.jobs.insert(id, body.clone());
    reply(StatusCode::CREATED, body)
}

async fn get_job(State(db): State<SharedBackend>, Path(id): Path<String>) -> Reply {
    let db = db.lock().unwrap();
    match db.jobs.get(&id) {
        Some(job) => reply(StatusCode::OK, job.clone()),
        None => message(StatusCode::NOT_FOUND, "Job not found"),
    }
}

fn owned_job<'a>(
    db: &'a mut BackendData,
    id: &str,
    headers: &HeaderMap,
) -> Result<&'a mut Value, Reply> {
    let job = db
        .jobs
        .get_mut(id)
        .ok_or_else(|| message(StatusCode::NOT_FOUND, "Job not found"))?;
    if actor(headers).as_deref() != job["employerId"].as_str() {
        return Err(message(StatusCode::FORBIDDEN, "Not your job"));
    }
    Ok(job)
}

async fn update_job(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(changes): Json<Value>,
) -> Reply {
    let mut db = db.lock().unwrap();
    match owned_job(&mut db, &id, &headers) {
        Ok(job) => {
            if let (Some(job), Some(changes)) = (job.as_object_mut(), changes.as_object()) {
                for (key, value) in changes {
                    job.insert(key.clone(), value.clone());
                }
            }
            reply(StatusCode::OK, job.clone())
        }
        Err(rejection) => rejection,
    }
}

async fn delete_job(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, Reply> {
    let mut db = db.lock().unwrap();
    owned_job(&mut db, &id, &headers)?;
    db.jobs.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}

async fn set_job_status(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut db = db.lock().unwrap();
    match owned_job(&mut db, &id, &headers) {
        Ok(job) => {
            job["status"] = body["status"].clone();
            reply(StatusCode::OK, job.clone())
        }
        Err(rejection) => rejection,
    }
}

async fn apply(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut db = db.lock().unwrap();
    let Some(job) = db.jobs.get(&id) else {
        return message(StatusCode::NOT_FOUND, "Job not found");
    };
    if job["status"] != "open" {
        return message(StatusCode::CONFLICT, "This job is no longer accepting applications");
    }
    if db
        .applications
        .iter()
        .any(|a| a["jobId"] == json!(id) && a["candidateId"] == body["candidateId"])
    {
        return message(StatusCode::CONFLICT, "You have already applied to this job");
    }

    let application = json!({
        "id": db.next_id("app"),
        "jobId": id,
        "candidateId": body["candidateId"],
        "coverLetter": body.get("coverLetter").cloned().unwrap_or(Value::Null),
        "status": "pending"
    });
    db.applications.push(application.clone());
    reply(StatusCode::CREATED, application)
}

async fn job_applications(State(db): State<SharedBackend>, Path(id): Path<String>) -> Reply {
    let db = db.lock().unwrap();
    let list: Vec<Value> = db
        .applications
        .iter()
        .filter(|a| a["jobId"] == json!(id))
        .cloned()
        .collect();
    reply(StatusCode::OK, json!(list))
}

async fn candidate_applications(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
) -> Reply {
    let db = db.lock().unwrap();
    let list: Vec<Value> = db
        .applications
        .iter()
        .filter(|a| a["candidateId"] == json!(id))
        .cloned()
        .collect();
    reply(StatusCode::OK, json!(list))
}

async fn contract(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let db = db.lock().unwrap();
    let Some(application) = db.applications.iter().find(|a| a["id"] == json!(id)) else {
        return message(StatusCode::NOT_FOUND, "Application not found");
    };

    reply(
        StatusCode::CREATED,
        json!({
            "applicationId": id,
            "jobId": application["jobId"],
            "body": format!(
                "Employment contract. Compensation: {}",
                body["compensation"].as_str().unwrap_or("to be agreed")
            )
        }),
    )
}

async fn list_blogs(State(db): State<SharedBackend>) -> Reply {
    let db = db.lock().unwrap();
    reply(StatusCode::OK, json!(db.blogs.values().cloned().collect::<Vec<_>>()))
}

async fn create_blog(State(db): State<SharedBackend>, Json(mut body): Json<Value>) -> Reply {
    let mut db = db.lock().unwrap();
    let id = db.next_id("blog");
    body["id"] = json!(id);
    db.blogs.insert(id, body.clone());
    reply(StatusCode::CREATED, body)
}

async fn get_blog(State(db): State<SharedBackend>, Path(id): Path<String>) -> Reply {
    let db = db.lock().unwrap();
    match db.blogs.get(&id) {
        Some(blog) => reply(StatusCode::OK, blog.clone()),
        None => message(StatusCode::NOT_FOUND, "Blog not found"),
    }
}

async fn delete_blog(
    State(db): State<SharedBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, Reply> {
    let mut db = db.lock().unwrap();
    let Some(blog) = db.blogs.get(&id) else {
        return Err(message(StatusCode::NOT_FOUND, "Blog not found"));
    };
    if actor(&headers).as_deref() != blog["authorId"].as_str() {
        return Err(message(StatusCode::FORBIDDEN, "Not your post"));
    }
    db.blogs.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}

async fn generate(Json(body): Json<Value>) -> Reply {
    let subject = body
        .get("title")
        .or_else(|| body.get("topic"))
        .and_then(Value::as_str)
        .unwrap_or("untitled");
    reply(
        StatusCode::OK,
        json!({ "content": format!("Generated draft about {}", subject) }),
    )
}

pub fn backend_router(db: SharedBackend) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/resend-otp", post(ok_message))
        .route("/api/auth/forgot-password", post(ok_message))
        .route("/api/auth/reset-password", post(ok_message))
        .route("/api/candidates/{id}", get(get_candidate).put(put_candidate))
        .route("/api/employers/{id}", get(get_employer).put(put_employer))
        .route("/api/candidates/{id}/applications", get(candidate_applications))
        .route("/api/jobs", get(list_jobs).post(create_job))
        .route("/api/jobs/{id}", get(get_job).put(update_job).delete(delete_job))
        .route("/api/jobs/{id}/status", patch(set_job_status))
        .route("/api/jobs/{id}/applications", get(job_applications).post(apply))
        .route("/api/applications/{id}/contract", post(contract))
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route("/api/blogs/{id}", get(get_blog).delete(delete_blog))
        .route("/api/ai/job-description", post(generate))
        .route("/api/ai/blog-post", post(generate))
        .with_state(db)
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn get_test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        expiry_seconds: 30 * 24 * 60 * 60,
        cookie_secure: false,
    }
}

fn test_email_config() -> EmailConfig {
    EmailConfig {
        enabled: false,
        smtp_host: "localhost".to_string(),
        smtp_port: 1025,
        smtp_username: String::new(),
        smtp_password: String::new(),
        from_email: "noreply@staffee.com".to_string(),
        from_name: "Staffee".to_string(),
        contact_email: "contact@staffee.com".to_string(),
    }
}

pub fn test_state(backend_url: &str) -> AppState {
    AppState {
        session_config: get_test_session_config(),
        backend: BackendClient::new(&BackendConfig::new(backend_url)).unwrap(),
        identity_cache: IdentityCache::new(
            Arc::new(MemoryStore::new()),
            chrono::Duration::days(3),
        ),
        email_config: test_email_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        media_config: MediaConfig {
            cloud_name: "demo".to_string(),
        },
        routes: RouteTable::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub backend: SharedBackend,
}

/// Gateway in front of a freshly seeded fake backend.
pub async fn setup_test_app() -> TestApp {
    let backend: SharedBackend = Arc::new(Mutex::new(seeded_data()));
    let url = serve(backend_router(backend.clone())).await;
    let state = test_state(&format!("{}/api", url));

    TestApp {
        router: init_router(state.clone()),
        state,
        backend,
    }
}

/// Gateway whose backend refuses connections.
pub fn setup_unreachable_app() -> TestApp {
    let state = test_state("http://127.0.0.1:9/api");
    TestApp {
        router: init_router(state.clone()),
        state,
        backend: Arc::new(Mutex::new(BackendData::default())),
    }
}

/// `Cookie` header value carrying a valid session for `user_id`.
pub fn session_cookie(user_id: &str, role: Role) -> String {
    let (token, _) = create_session_token(user_id, role, &get_test_session_config()).unwrap();
    format!("{}={}", SESSION_COOKIE, token)
}

pub fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// The `session=...` pair from a response's `Set-Cookie`, if any.
pub fn set_session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{}=", SESSION_COOKIE)))
        .map(str::to_string)
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", uuid::Uuid::new_v4())
}
