use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthMember;
use crate::db::models::team_template::{AssignPositionRequest, CreateTemplateRequest};
use crate::services::context::RequestContext;
use crate::services::{InstancesService, TemplatesService};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

/// 为 booking 创建队伍模板
pub async fn create_template(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<CreateTemplateRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match TemplatesService::create(&mut conn, &ctx, booking_id, &payload) {
        Ok(template) => (
            StatusCode::CREATED,
            Json(ApiResponse::created(
                template,
                "Template created successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_templates(
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

    match TemplatesService::list_by_booking(&mut conn, &ctx, booking_id) {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                list,
                "Templates retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_template(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(template_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match TemplatesService::get_with_positions(&mut conn, &ctx, template_id) {
        Ok(template) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                template,
                "Template retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 指定单个位置的成员（只更新这一个槽位）
pub async fn assign_position(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(template_id): Path<Uuid>,
    Json(payload): Json<AssignPositionRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match TemplatesService::assign_position(
        &mut conn,
        &ctx,
        template_id,
        &payload.position,
        payload.member_id,
    ) {
        Ok(position) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                position,
                "Position updated successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 将模板实例化为本次 booking 的队伍
pub async fn instantiate_template(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(template_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match InstancesService::instantiate(&mut conn, &ctx, template_id) {
        Ok(instance) => (
            StatusCode::CREATED,
            Json(ApiResponse::created(
                instance,
                "Team instantiated successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
