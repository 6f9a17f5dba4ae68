use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{
    forgot_password, login, logout, resend_otp, reset_password, signup, verify_otp,
};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
        .route("/verify-otp", post(verify_otp))
        .route("/resend-otp", post(resend_otp))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
}
