use axum::{Router, Server, middleware::from_fn};
use club_backend::{AppState, db::DbPool};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match club_backend::config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    club_backend::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(std::time::Duration::from_secs(
            config.database_connection_timeout,
        ))
        .build(manager)
        .expect("Failed to create database connection pool");

    // Initialize Redis
    let redis =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Application state
    let state = Arc::new(AppState::new(db, redis, config));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes that don't need authentication
    let public_routes = club_backend::routes::create_public_router(state.clone());

    // Apply auth middleware only to routes that need it
    let protected_routes = club_backend::routes::create_router(state.clone()).layer(
        axum::middleware::from_fn_with_state(
            state.clone(),
            club_backend::middleware::auth::auth_middleware,
        ),
    );

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(from_fn(club_backend::middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed");
}
