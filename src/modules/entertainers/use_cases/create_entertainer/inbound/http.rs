use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::entertainers::core::entertainer::EntertainerInput;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EntertainerInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.create_handler.handle(body).await {
        Ok(entertainer) => (
            StatusCode::CREATED,
            [(
                header::LOCATION,
                format!("/api/entertainers/{}", entertainer.id),
            )],
            Json(entertainer),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
