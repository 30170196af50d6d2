pub mod audit;
pub mod auth;
pub mod bookings;
pub mod members;
pub mod pools;
pub mod teams;
pub mod templates;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

/// Routes reachable without a token.
pub fn create_public_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .with_state(state)
}

/// Everything else sits behind the auth middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/profile", get(auth::get_profile))
        .route("/members", get(members::get_members))
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id", put(members::update_member))
        .route(
            "/members/:member_id/approve",
            post(members::approve_member),
        )
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings", get(bookings::get_bookings))
        .route("/bookings/:booking_id", get(bookings::get_booking))
        .route("/bookings/:booking_id", put(bookings::update_booking))
        .route("/bookings/:booking_id", delete(bookings::delete_booking))
        .route("/bookings/:booking_id/pool", post(pools::open_pool))
        .route(
            "/bookings/:booking_id/pool",
            get(pools::get_pool_for_booking),
        )
        .route(
            "/pools/:pool_id/registrations",
            post(pools::register_into_pool),
        )
        .route(
            "/pools/:pool_id/registrations",
            get(pools::get_registrations),
        )
        .route("/pools/:pool_id/withdraw", post(pools::withdraw_from_pool))
        .route("/pools/:pool_id/available", post(pools::mark_available))
        .route("/pools/:pool_id/select", post(pools::select_registration))
        .route(
            "/pools/:pool_id/unselect",
            post(pools::unselect_registration),
        )
        .route("/pools/:pool_id/close", post(pools::close_pool))
        .route("/pools/auto-close", post(pools::auto_close_pools))
        .route(
            "/bookings/:booking_id/templates",
            post(templates::create_template),
        )
        .route(
            "/bookings/:booking_id/templates",
            get(templates::get_templates),
        )
        .route("/templates/:template_id", get(templates::get_template))
        .route(
            "/templates/:template_id/positions",
            put(templates::assign_position),
        )
        .route(
            "/templates/:template_id/instantiate",
            post(templates::instantiate_template),
        )
        .route(
            "/bookings/:booking_id/teams",
            get(teams::get_teams_for_booking),
        )
        .route("/teams/:instance_id", get(teams::get_team))
        .route(
            "/assignments/:assignment_id/confirm",
            post(teams::confirm_availability),
        )
        .route(
            "/assignments/:assignment_id/substitute",
            post(teams::substitute_assignment),
        )
        .route("/audit-logs", get(audit::get_audit_logs))
        .with_state(state)
}
