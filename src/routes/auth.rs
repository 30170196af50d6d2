use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::{AuthMember, LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::services::MembersService;
use crate::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// 注册新成员
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MembersService::register(&mut conn, &payload, state.config.bcrypt_cost) {
        Ok(member) => (
            StatusCode::CREATED,
            Json(ApiResponse::created(member, "Member registered successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MembersService::login(&mut conn, &state.auth_service, &payload) {
        Ok(tokens) => (
            StatusCode::OK,
            Json(ApiResponse::success(tokens, "Login successful")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 刷新令牌
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MembersService::refresh(&mut conn, &state.auth_service, &payload.refresh_token) {
        Ok(tokens) => (
            StatusCode::OK,
            Json(ApiResponse::success(tokens, "Token refreshed successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 获取当前成员资料
pub async fn get_profile(auth_member: AuthMember) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            auth_member,
            "Profile retrieved successfully",
        )),
    )
        .into_response()
}
