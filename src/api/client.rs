//! Authenticated HTTP client for the admin backend
//!
//! Every request carries `Authorization: Bearer <token>` when the session
//! has one. A 401 whose body says `SESSION_EXPIRED` clears the session and
//! leaves a redirect to the login route on it; every other failure is
//! returned to the caller unchanged.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, Result, SESSION_EXPIRED_CODE};
use super::models::ErrorBody;
use super::session::SessionContext;
use crate::config::ApiSettings;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, session: SessionContext) -> Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST without a body, ignoring any response body
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.send_raw(self.request(Method::POST, path)).await?;
        Ok(())
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send_raw(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_raw(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "API response");

        match classify_failure(status, &body) {
            None => Ok(body),
            Some(ApiError::SessionExpired) => {
                self.session.expire();
                Err(ApiError::SessionExpired)
            }
            Some(err) => Err(err),
        }
    }
}

/// The error a response represents, or `None` for success
pub fn classify_failure(status: StatusCode, body: &str) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED && parsed.code.as_deref() == Some(SESSION_EXPIRED_CODE) {
        return Some(ApiError::SessionExpired);
    }
    Some(ApiError::Status {
        status,
        code: parsed.code,
        message: parsed.message,
    })
}
