//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        loan::LoanDetails,
        user::{CreateUser, UserDetails},
    },
};

/// List users with their issued books
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserDetails>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> Json<Vec<UserDetails>> {
    Json(state.services.users.list_users().await)
}

/// Plain-text user listing with issued titles
#[utoipa::path(
    get,
    path = "/users/report",
    tag = "users",
    responses(
        (status = 200, description = "Users and their issued books", body = String, content_type = "text/plain")
    )
)]
pub async fn users_report(State(state): State<crate::AppState>) -> String {
    state.services.users.users_report().await
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetails),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<UserDetails>> {
    let user = state.services.users.get_user(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserDetails),
        (status = 400, description = "Empty name or non-numeric id"),
        (status = 409, description = "User id already exists")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    WithRejection(Json(user), _): WithRejection<Json<CreateUser>, AppError>,
) -> AppResult<(StatusCode, Json<UserDetails>)> {
    let created = state.services.users.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get loans for a specific user
#[utoipa::path(
    get,
    path = "/users/{id}/loans",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's active loans", body = Vec<LoanDetails>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_loans(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.get_user_loans(id).await?;
    Ok(Json(loans))
}
