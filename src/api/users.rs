//! User management endpoints

use super::client::ApiClient;
use super::error::Result;
use super::models::{ApiResponse, CreateUserRequest, UpdateUserRequest, User};

const USERS_PATH: &str = "/api/v1/users";

#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn user_path(id: i64) -> String {
        format!("{}/{}", USERS_PATH, id)
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<User>>> {
        self.client.get(USERS_PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<ApiResponse<User>> {
        self.client.get(&Self::user_path(id)).await
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<ApiResponse<User>> {
        self.client.post(USERS_PATH, request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateUserRequest,
    ) -> Result<ApiResponse<User>> {
        self.client.put(&Self::user_path(id), request).await
    }

    /// The backend answers with `data: null`
    pub async fn delete(&self, id: i64) -> Result<ApiResponse<Option<serde_json::Value>>> {
        self.client.delete(&Self::user_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_path() {
        assert_eq!(UserApi::user_path(42), "/api/v1/users/42");
    }

    #[test]
    fn test_delete_envelope_without_data() {
        let resp: ApiResponse<Option<serde_json::Value>> = serde_json::from_str(
            r#"{"code":"SUCCESS","message":"deleted","timestamp":1}"#,
        )
        .unwrap();
        assert_eq!(resp.data, None);
    }
}
