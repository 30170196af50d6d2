use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::auth::AuthMember;
use crate::db::models::booking::{BookingsQuery, CreateBookingRequest, UpdateBookingRequest};
use crate::services::BookingsService;
use crate::services::context::RequestContext;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

/// 创建 Booking
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Json(payload): Json<CreateBookingRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match BookingsService::create(&mut conn, &ctx, &payload) {
        Ok(booking) => (
            StatusCode::CREATED,
            Json(ApiResponse::created(booking, "Booking created successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// 获取 bookings 列表
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Query(query): Query<BookingsQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match BookingsService::list(&mut conn, &ctx, query.from, query.to) {
        Ok(list) => (
            StatusCode::OK,
            Json(ApiResponse::success(list, "Bookings retrieved successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_booking(
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

    match BookingsService::get_by_id(&mut conn, &ctx, booking_id) {
        Ok(booking) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                booking,
                "Booking retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    auth_member: AuthMember,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };
    let ctx = RequestContext::from(&auth_member);

    match BookingsService::update(&mut conn, &ctx, booking_id, &payload) {
        Ok(booking) => (
            StatusCode::OK,
            Json(ApiResponse::success(booking, "Booking updated successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_booking(
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

    match BookingsService::delete(&mut conn, &ctx, booking_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::ok("Booking deleted successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
