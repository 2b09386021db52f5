//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::loan::{LoanDetails, LoanRequest},
};

/// Issue or return outcome
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    /// Status message
    pub message: String,
    pub loan: LoanDetails,
}

/// List all outstanding loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Outstanding loans", body = Vec<LoanDetails>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> Json<Vec<LoanDetails>> {
    Json(state.services.loans.list_loans().await)
}

/// Issue a book to a user
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Book issued", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "User not found"),
        (status = 409, description = "No copy of the title available")
    )
)]
pub async fn issue_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(request), _): WithRejection<Json<LoanRequest>, AppError>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let loan = state.services.loans.issue_book(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanResponse {
            message: format!("Book issued successfully to {}!", loan.user.name),
            loan,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "User not found, or book not issued to the user")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(request), _): WithRejection<Json<LoanRequest>, AppError>,
) -> AppResult<Json<LoanResponse>> {
    let loan = state.services.loans.return_book(request).await?;

    Ok(Json(LoanResponse {
        message: "Book returned successfully!".to_string(),
        loan,
    }))
}
