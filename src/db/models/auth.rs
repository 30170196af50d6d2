use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::{MemberRole, MemberStatus};
use crate::validation::rules::{validate_password_strength, validate_person_name};

// Authentication DTOs
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthMember {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: MemberStatus,
    pub role: MemberRole,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth_info) = parts
            .extensions
            .get::<crate::middleware::auth::AuthMemberInfo>()
        {
            Ok(auth_info.member.clone())
        } else {
            Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()))
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_person_name"))]
    pub name: String,

    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    pub phone: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub member: AuthMember,
}

#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
