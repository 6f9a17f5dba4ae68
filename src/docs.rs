use serde::Serialize;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use staffee_auth::Role;
use staffee_models::ai::{BlogPostPrompt, GeneratedContent, JobDescriptionPrompt};
use staffee_models::auth::{
    AccountUser, ForgotPasswordRequest, LoginRequest, MessageResponse, ResendOtpRequest,
    ResetPasswordRequest, SessionResponse, SignupRequest, VerifyOtpRequest,
};
use staffee_models::blogs::{Blog, CreateBlogDto};
use staffee_models::contact::ContactMessage;
use staffee_models::jobs::{
    ApplicationStatus, ApplyRequest, Contract, CreateJobDto, EmploymentType,
    GenerateContractRequest, Job, JobApplication, JobFilter, JobStatus, SalaryRange,
    UpdateJobDto,
};
use staffee_models::profiles::{
    CandidateProfile, Certification, Education, EmployerProfile, Experience, Profile,
    ProfileCompletion,
};

use crate::modules::health::HealthResponse;

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health_check,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::verify_otp,
        crate::modules::auth::controller::resend_otp,
        crate::modules::auth::controller::forgot_password,
        crate::modules::auth::controller::reset_password,
        crate::modules::profiles::controller::get_profile,
        crate::modules::profiles::controller::update_profile,
        crate::modules::profiles::controller::get_completion,
        crate::modules::jobs::controller::list_jobs,
        crate::modules::jobs::controller::create_job,
        crate::modules::jobs::controller::get_job,
        crate::modules::jobs::controller::update_job,
        crate::modules::jobs::controller::delete_job,
        crate::modules::jobs::controller::toggle_status,
        crate::modules::jobs::controller::apply_to_job,
        crate::modules::jobs::controller::get_job_applications,
        crate::modules::applications::controller::get_my_applications,
        crate::modules::applications::controller::generate_contract,
        crate::modules::blogs::controller::list_blogs,
        crate::modules::blogs::controller::create_blog,
        crate::modules::blogs::controller::get_blog,
        crate::modules::blogs::controller::delete_blog,
        crate::modules::ai::controller::generate_job_description,
        crate::modules::ai::controller::generate_blog_post,
        crate::modules::contact::controller::submit_contact,
    ),
    components(
        schemas(
            Role,
            AccountUser,
            LoginRequest,
            SignupRequest,
            SessionResponse,
            VerifyOtpRequest,
            ResendOtpRequest,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            MessageResponse,
            CandidateProfile,
            EmployerProfile,
            Experience,
            Education,
            Certification,
            Profile,
            ProfileCompletion,
            Job,
            JobStatus,
            JobFilter,
            EmploymentType,
            SalaryRange,
            CreateJobDto,
            UpdateJobDto,
            JobApplication,
            ApplicationStatus,
            ApplyRequest,
            GenerateContractRequest,
            Contract,
            Blog,
            CreateBlogDto,
            JobDescriptionPrompt,
            BlogPostPrompt,
            GeneratedContent,
            ContactMessage,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SessionCookieAddon),
    security(("session_cookie" = [])),
    tags(
        (name = "Authentication", description = "Sign-in, sign-up and email verification"),
        (name = "Profiles", description = "Candidate and employer profiles"),
        (name = "Jobs", description = "Job postings and applying"),
        (name = "Applications", description = "Applications and contracts"),
        (name = "Blogs", description = "Blog posts"),
        (name = "AI", description = "AI-assisted drafting"),
        (name = "Contact", description = "Contact form"),
        (name = "Health", description = "Probes")
    ),
    info(
        title = "Staffee API",
        version = "0.1.0",
        description = "Web gateway for Staffee, the recruitment platform connecting candidates and employers. Authenticated with the `session` cookie.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session"))),
            )
        }
    }
}
