// Backend port for SEO Master Pro
//
// Pages talk to a `Backend` trait object. `MockBackend` answers with canned
// data after a simulated delay; `HttpBackend` speaks JSON to `/api/v1`.
use crate::config::{AppConfig, BackendMode};
use crate::types::*;
use crate::wizard::{AnalysisReport, AnalysisRequest};
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::ops::Deref;
use std::rc::Rc;
use thiserror::Error;

pub mod mock;

pub use mock::MockBackend;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("deserialization error: {0}")]
    Deserialization(String),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Text for the alert shown when a submission fails.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Unable to reach the server. Please check your connection and try again.".to_string()
            }
            ApiError::Http(401) | ApiError::Http(403) => {
                "You are not allowed to do that. Please sign in again.".to_string()
            }
            ApiError::Http(status) if *status >= 500 => {
                "The server ran into a problem. Please try again later.".to_string()
            }
            ApiError::Http(status) => format!("The request could not be completed (HTTP {}).", status),
            ApiError::Rejected(message) => message.clone(),
            ApiError::Cancelled => "The request was cancelled.".to_string(),
            ApiError::Serialization(_) | ApiError::Deserialization(_) | ApiError::Unknown(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Deserialization(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[async_trait(?Send)]
pub trait Backend {
    async fn sign_up(&self, request: SignUpRequest) -> Result<(), ApiError>;
    async fn sign_in(&self, request: SignInRequest) -> Result<Session, ApiError>;
    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<UserProfile, ApiError>;
    async fn resend_otp(&self, email: &str) -> Result<(), ApiError>;
    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError>;
    async fn complete_profile(&self, request: CompleteProfileRequest) -> Result<(), ApiError>;

    async fn run_profile_analysis(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError>;

    async fn create_checkout(&self, request: CheckoutRequest) -> Result<CheckoutSession, ApiError>;
    async fn verify_checkout(&self, session_id: &str, plan: PlanTier) -> Result<CheckoutReceipt, ApiError>;

    async fn user_dashboard(&self) -> Result<UserDashboard, ApiError>;
    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError>;

    async fn list_plans(&self) -> Result<Vec<PlanRecord>, ApiError>;
    async fn save_plan(&self, plan: PlanRecord) -> Result<PlanRecord, ApiError>;
    async fn delete_plan(&self, id: &str) -> Result<(), ApiError>;

    async fn list_users(&self) -> Result<Vec<ManagedUser>, ApiError>;
    async fn set_user_suspended(&self, id: &str, suspended: bool) -> Result<(), ApiError>;

    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, ApiError>;
    async fn refund_payment(&self, id: &str) -> Result<PaymentRecord, ApiError>;
}

/// Shared handle placed in context.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn Backend>);

impl BackendHandle {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match config.backend {
            BackendMode::Mock => Self::new(MockBackend::new(config)),
            BackendMode::Http => Self::new(HttpBackend::new(config.api_base_url.clone())),
        }
    }
}

impl Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub fn provide_backend(config: &AppConfig) -> BackendHandle {
    let handle = BackendHandle::from_config(config);
    log::info!("backend: {:?}", config.backend);
    provide_context(handle.clone());
    handle
}

pub fn use_backend() -> BackendHandle {
    expect_context::<BackendHandle>()
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyCheckoutBody {
    plan: PlanTier,
}

#[derive(Serialize)]
struct SuspensionBody {
    suspended: bool,
}

pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = Request::get(&self.url(path)).send().await?;
        read_json(response).await
    }

    async fn send_json<T, B>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = builder
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await?;
        read_json(response).await
    }

    async fn send_unit<B>(&self, builder: RequestBuilder, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await?,
            None => builder.send().await?,
        };
        check_status(&response).await
    }
}

async fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    if matches!(status, 400 | 409 | 422) {
        if let Ok(body) = response.json::<ErrorBody>().await {
            return Err(ApiError::Rejected(body.message));
        }
    }
    log::warn!("{} -> HTTP {}", response.url(), status);
    Err(ApiError::Http(status))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn sign_up(&self, request: SignUpRequest) -> Result<(), ApiError> {
        self.send_unit(Request::post(&self.url("/auth/signup")), Some(&request)).await
    }

    async fn sign_in(&self, request: SignInRequest) -> Result<Session, ApiError> {
        self.send_json(Request::post(&self.url("/auth/signin")), &request).await
    }

    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<UserProfile, ApiError> {
        self.send_json(Request::post(&self.url("/auth/otp/verify")), &request).await
    }

    async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        self.send_unit(Request::post(&self.url("/auth/otp/resend")), Some(&EmailBody { email }))
            .await
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.send_unit(Request::post(&self.url("/auth/password/forgot")), Some(&EmailBody { email }))
            .await
    }

    async fn complete_profile(&self, request: CompleteProfileRequest) -> Result<(), ApiError> {
        self.send_unit(Request::post(&self.url("/profile/complete")), Some(&request)).await
    }

    async fn run_profile_analysis(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        self.send_json(Request::post(&self.url("/linkedin/analysis")), &request).await
    }

    async fn create_checkout(&self, request: CheckoutRequest) -> Result<CheckoutSession, ApiError> {
        self.send_json(Request::post(&self.url("/payments/checkout")), &request).await
    }

    async fn verify_checkout(&self, session_id: &str, plan: PlanTier) -> Result<CheckoutReceipt, ApiError> {
        let path = format!("/payments/checkout/{}/verify", session_id);
        self.send_json(Request::post(&self.url(&path)), &VerifyCheckoutBody { plan })
            .await
    }

    async fn user_dashboard(&self) -> Result<UserDashboard, ApiError> {
        self.get("/dashboard/user").await
    }

    async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.get("/dashboard/admin").await
    }

    async fn list_plans(&self) -> Result<Vec<PlanRecord>, ApiError> {
        self.get("/admin/plans").await
    }

    async fn save_plan(&self, plan: PlanRecord) -> Result<PlanRecord, ApiError> {
        let path = format!("/admin/plans/{}", plan.id);
        self.send_json(Request::put(&self.url(&path)), &plan).await
    }

    async fn delete_plan(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/plans/{}", id);
        self.send_unit::<()>(Request::delete(&self.url(&path)), None).await
    }

    async fn list_users(&self) -> Result<Vec<ManagedUser>, ApiError> {
        self.get("/admin/users").await
    }

    async fn set_user_suspended(&self, id: &str, suspended: bool) -> Result<(), ApiError> {
        let path = format!("/admin/users/{}/suspension", id);
        self.send_unit(Request::post(&self.url(&path)), Some(&SuspensionBody { suspended }))
            .await
    }

    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.get("/admin/payments").await
    }

    async fn refund_payment(&self, id: &str) -> Result<PaymentRecord, ApiError> {
        let path = format!("/admin/payments/{}/refund", id);
        self.send_json(Request::post(&self.url(&path)), &()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Rejected("Invalid verification code".to_string()).user_message(),
            "Invalid verification code"
        );
        assert!(ApiError::Http(503).user_message().contains("try again later"));
        assert!(ApiError::Http(404).user_message().contains("HTTP 404"));
        assert!(ApiError::Network("offline".to_string()).user_message().contains("connection"));
    }

    #[test]
    fn test_http_urls_are_versioned() {
        let backend = HttpBackend::new("https://api.seomaster.pro/".to_string());
        assert_eq!(
            backend.url("/admin/plans"),
            "https://api.seomaster.pro/api/v1/admin/plans"
        );
    }
}
