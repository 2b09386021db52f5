//! Catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, CreateBook},
};

/// List every catalog line in catalog order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Catalog lines", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Plain-text catalog listing
#[utoipa::path(
    get,
    path = "/books/report",
    tag = "books",
    responses(
        (status = 200, description = "One line per book, or a no-books message", body = String, content_type = "text/plain")
    )
)]
pub async fn books_report(State(state): State<crate::AppState>) -> String {
    state.services.catalog.books_report().await
}

/// Get a catalog line by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Catalog line", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<u32>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(BookId(id)).await?;
    Ok(Json(book))
}

/// Add a catalog line
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Empty title or author, or invalid quantity")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(book), _): WithRejection<Json<CreateBook>, AppError>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.add_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
