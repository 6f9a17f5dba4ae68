use reqwest::Method;
use tracing::instrument;

use staffee_models::auth::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, ResendOtpRequest,
    ResetPasswordRequest, SignupRequest, VerifyOtpRequest,
};
use staffee_models::OtpCode;

use crate::client::BackendClient;
use crate::error::ClientError;

impl BackendClient {
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let call = self.request(Method::POST, &["auth", "login"])?.json(request);
        self.send_json(call).await
    }

    #[instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        let call = self.request(Method::POST, &["auth", "signup"])?.json(request);
        self.send_json(call).await
    }

    /// Sends an already-normalised code.
    #[instrument(skip(self, otp))]
    pub async fn verify_otp(
        &self,
        email: &str,
        otp: &OtpCode,
    ) -> Result<MessageResponse, ClientError> {
        let body = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.as_str().to_string(),
        };
        let call = self.request(Method::POST, &["auth", "verify-otp"])?.json(&body);
        self.send_json(call).await
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn resend_otp(
        &self,
        request: &ResendOtpRequest,
    ) -> Result<MessageResponse, ClientError> {
        let call = self.request(Method::POST, &["auth", "resend-otp"])?.json(request);
        self.send_json(call).await
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let call = self
            .request(Method::POST, &["auth", "forgot-password"])?
            .json(request);
        self.send_json(call).await
    }

    #[instrument(skip(self, request))]
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let call = self
            .request(Method::POST, &["auth", "reset-password"])?
            .json(request);
        self.send_json(call).await
    }
}
