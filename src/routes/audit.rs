use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::audit::AuditLogsQuery;
use crate::db::models::auth::AuthMember;
use crate::services::AuditService;
use crate::services::context::RequestContext;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn get_audit_logs(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Query(query): Query<AuditLogsQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match AuditService::list(
        &mut conn,
        &ctx,
        query.entity_type.as_deref(),
        query.entity_id,
        query.limit,
    ) {
        Ok(logs) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                logs,
                "Audit logs retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
