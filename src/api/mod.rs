//! Clients for the admin backend the SQL console runs against
//!
//! All clients share one [`ApiClient`], which carries the explicit
//! [`SessionContext`] used for bearer auth and session expiry.

mod auth;
mod client;
mod error;
mod models;
mod session;
mod users;

pub use auth::AuthApi;
pub use client::{classify_failure, ApiClient};
pub use error::{ApiError, Result, SESSION_EXPIRED_CODE};
pub use models::{
    ApiResponse, CreateUserRequest, LoginRequest, LoginResponse, Role, UpdateUserRequest, User,
};
pub use session::{SessionContext, SessionState, SessionUser, LOGIN_ROUTE};
pub use users::UserApi;
