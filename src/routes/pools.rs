use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthMember;
use crate::db::models::pool::{
    OpenPoolRequest, RegisterIntoPoolRequest, RegistrationStatusRequest, RegistrationsQuery,
    WithdrawRequest,
};
use crate::services::PoolsService;
use crate::services::context::RequestContext;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

/// 为 booking 开启报名池
pub async fn open_pool(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<OpenPoolRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::open_pool(&mut conn, &ctx, booking_id, &payload) {
        Ok(pool) => (
            StatusCode::CREATED,
            Json(ApiResponse::created(pool, "Pool opened successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_pool_for_booking(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::get_for_booking(&mut conn, &ctx, booking_id) {
        Ok(pool) => (
            StatusCode::OK,
            Json(ApiResponse::success(pool, "Pool retrieved successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 成员报名
pub async fn register_into_pool(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<RegisterIntoPoolRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::register(&mut conn, &ctx, pool_id, payload.member_id) {
        Ok(registration) => (
            StatusCode::CREATED,
            Json(ApiResponse::created(
                registration,
                "Registered into pool successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 退出报名
pub async fn withdraw_from_pool(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<WithdrawRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::withdraw(&mut conn, &ctx, pool_id, payload.member_id) {
        Ok(registration) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                registration,
                "Withdrawn from pool successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 成员确认可出场
pub async fn mark_available(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<WithdrawRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::mark_available(&mut conn, &ctx, pool_id, payload.member_id) {
        Ok(registration) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                registration,
                "Registration marked available",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 选入队伍
pub async fn select_registration(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<RegistrationStatusRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::select(&mut conn, &ctx, pool_id, payload.member_id) {
        Ok(registration) => (
            StatusCode::OK,
            Json(ApiResponse::success(registration, "Registration selected")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 取消选入（回到 available，不丢数据）
pub async fn unselect_registration(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
    Json(payload): Json<RegistrationStatusRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::unselect(&mut conn, &ctx, pool_id, payload.member_id) {
        Ok(registration) => (
            StatusCode::OK,
            Json(ApiResponse::success(registration, "Registration unselected")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_registrations(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
    Query(query): Query<RegistrationsQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::list_by_status(&mut conn, &ctx, pool_id, query.status.as_deref()) {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                list,
                "Registrations retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 关闭报名池（幂等）
pub async fn close_pool(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(pool_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::close_pool(&mut conn, &ctx, pool_id) {
        Ok(pool) => (
            StatusCode::OK,
            Json(ApiResponse::success(pool, "Pool closed")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 自动关闭已到期的报名池
pub async fn auto_close_pools(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match PoolsService::auto_close_due(&mut conn, &ctx) {
        Ok(closed) => {
            let message = format!("Auto-closed {} pools past their deadline", closed.len());
            (
                StatusCode::OK,
                Json(ApiResponse::success(closed, &message)),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
