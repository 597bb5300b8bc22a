//! Wire types for the admin backend

use serde::{Deserialize, Serialize};

/// Envelope every backend response is wrapped in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    pub data: T,
    pub timestamp: i64,
}

/// Envelope fields present on error bodies, where `data` may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Designer,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("ADMIN"));
        assert_eq!(
            serde_json::from_value::<Role>(json!("DESIGNER")).unwrap(),
            Role::Designer
        );
        assert!(serde_json::from_value::<Role>(json!("admin")).is_err());
    }

    #[test]
    fn test_user_envelope() {
        let body = json!({
            "code": "SUCCESS",
            "message": "ok",
            "data": [{
                "id": 7,
                "username": "alice",
                "role": "VIEWER",
                "enabled": true,
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-02T00:00:00"
            }],
            "timestamp": 1700000000000i64
        });

        let resp: ApiResponse<Vec<User>> = serde_json::from_value(body).unwrap();
        assert_eq!(resp.data[0].username, "alice");
        assert_eq!(resp.data[0].role, Role::Viewer);
        assert_eq!(resp.data[0].created_at, "2024-01-01T00:00:00");
    }

    #[test]
    fn test_login_response_camel_case() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "token": "t",
            "userId": 1,
            "username": "admin",
            "role": "ADMIN"
        }))
        .unwrap();
        assert_eq!(resp.user_id, 1);
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let req = UpdateUserRequest {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(req).unwrap(), json!({ "enabled": false }));
    }

    #[test]
    fn test_create_request_without_enabled() {
        let req = CreateUserRequest {
            username: "bob".into(),
            password: "pw".into(),
            role: Role::Designer,
            enabled: None,
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({ "username": "bob", "password": "pw", "role": "DESIGNER" })
        );
    }
}
