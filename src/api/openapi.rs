//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{books, health, loans, snapshot, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shelf API",
        version = "0.1.0",
        description = "Small library inventory and loans REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::books_report,
        books::get_book,
        books::create_book,
        // Users
        users::list_users,
        users::users_report,
        users::get_user,
        users::create_user,
        users::get_user_loans,
        // Loans
        loans::list_loans,
        loans::issue_book,
        loans::return_book,
        // Snapshot
        snapshot::save_snapshot,
        snapshot::load_snapshot,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::models::book::Book,
            crate::models::book::BookId,
            crate::models::book::BookShort,
            crate::models::book::CreateBook,
            crate::models::user::UserDetails,
            crate::models::user::UserShort,
            crate::models::user::CreateUser,
            crate::models::loan::LoanDetails,
            crate::models::loan::LoanRequest,
            crate::models::snapshot::SnapshotInfo,
            loans::LoanResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Catalog lines"),
        (name = "users", description = "Library patrons"),
        (name = "loans", description = "Issuing and returning books"),
        (name = "snapshot", description = "Whole-library persistence")
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
