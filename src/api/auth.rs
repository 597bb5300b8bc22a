//! Auth endpoints: login, logout, current user

use super::client::ApiClient;
use super::error::Result;
use super::models::{LoginRequest, LoginResponse};

const LOGIN_PATH: &str = "/api/v1/auth/login";
const LOGOUT_PATH: &str = "/api/v1/auth/logout";
const CURRENT_PATH: &str = "/api/v1/auth/current";

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in and store the token and user on the client's session
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post(LOGIN_PATH, &request).await?;
        self.client.session().set_login(&response);
        Ok(response)
    }

    /// Log out on the server; the local session is cleared either way
    pub async fn logout(&self) -> Result<()> {
        let result = self.client.post_empty(LOGOUT_PATH).await;
        self.client.session().clear();
        result
    }

    /// Whatever the backend reports about the current user
    pub async fn current_user(&self) -> Result<serde_json::Value> {
        self.client.get(CURRENT_PATH).await
    }
}
