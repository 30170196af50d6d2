use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthMember;
use crate::db::models::team_instance::{ConfirmAvailabilityRequest, SubstituteRequest};
use crate::services::context::RequestContext;
use crate::services::{AvailabilityService, InstancesService};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_teams_for_booking(
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

    match InstancesService::list_by_booking(&mut conn, &ctx, booking_id) {
        Ok(teams) => (
            StatusCode::OK,
            Json(ApiResponse::success(teams, "Teams retrieved successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(instance_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match InstancesService::get_with_assignments(&mut conn, &ctx, instance_id) {
        Ok(team) => (
            StatusCode::OK,
            Json(ApiResponse::success(team, "Team retrieved successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 确认出场状态（一次性，不可撤销）
pub async fn confirm_availability(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(assignment_id): Path<Uuid>,
    Json(payload): Json<ConfirmAvailabilityRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match AvailabilityService::confirm(&mut conn, &ctx, assignment_id, payload.available) {
        Ok(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(assignment, "Availability confirmed")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 管理员换人，并在替换日志中记录
pub async fn substitute_assignment(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(assignment_id): Path<Uuid>,
    Json(payload): Json<SubstituteRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match AvailabilityService::substitute(&mut conn, &ctx, assignment_id, &payload) {
        Ok(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assignment,
                "Substitution recorded successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
