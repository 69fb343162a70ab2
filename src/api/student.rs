//! Identity endpoint

use axum::{extract::State, Json};

use crate::{config::StudentInfo, AppState};

/// Identity of the service author, readable without credentials
#[utoipa::path(
    get,
    path = "/me",
    tag = "student",
    responses(
        (status = 200, description = "Name, registration number and course", body = StudentInfo)
    )
)]
pub async fn whoami(State(state): State<AppState>) -> Json<StudentInfo> {
    Json(state.config.student.clone())
}
