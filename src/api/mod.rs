//! API handlers for Shelf REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod snapshot;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books (catalog)
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/report", get(books::books_report))
        .route("/books/:id", get(books::get_book))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/report", get(users::users_report))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/loans", get(users::get_user_loans))
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::issue_book))
        .route("/loans/return", post(loans::return_book))
        // Snapshot
        .route("/snapshot/save", post(snapshot::save_snapshot))
        .route("/snapshot/load", post(snapshot::load_snapshot))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
