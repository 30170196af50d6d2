use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthMember;
use crate::db::models::member::{ApproveMemberRequest, MembersQuery, UpdateMemberRequest};
use crate::services::MembersService;
use crate::services::context::RequestContext;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_members(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Query(query): Query<MembersQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match MembersService::list(&mut conn, &ctx, query.status.as_deref()) {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(list, "Members retrieved successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(member_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match MembersService::get_by_id(&mut conn, &ctx, member_id) {
        Ok(member) => (
            StatusCode::OK,
            Json(ApiResponse::success(member, "Member retrieved successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(member_id): Path<Uuid>,
    Json(payload): Json<UpdateMemberRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match MembersService::update_profile(&mut conn, &ctx, member_id, &payload) {
        Ok(member) => {
            state.member_cache.invalidate(member.id).await;
            (
                StatusCode::OK,
                Json(ApiResponse::success(member, "Member updated successfully")),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// 审批成员（调整会籍类别）
pub async fn approve_member(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(member_id): Path<Uuid>,
    Json(payload): Json<ApproveMemberRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match MembersService::set_status(&mut conn, &ctx, member_id, payload.status) {
        Ok(member) => {
            state.member_cache.invalidate(member.id).await;
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    member,
                    "Member status updated successfully",
                )),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
