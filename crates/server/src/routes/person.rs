use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use service::person::PersonDraft;

use crate::errors::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/addPerson", post(add_person))
}

/// Store a person; the response carries no body.
#[utoipa::path(
    post,
    path = "/addPerson",
    tag = "person",
    request_body = crate::openapi::PersonDoc,
    responses((status = 200, description = "Stored"))
)]
pub async fn add_person(
    State(state): State<AppState>,
    Json(input): Json<PersonDraft>,
) -> Result<StatusCode, ApiError> {
    state.persons.add_person(input).await?;
    Ok(StatusCode::OK)
}
