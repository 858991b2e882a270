use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::entertainers::core::entertainer::EntertainerId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<EntertainerId>,
) -> impl IntoResponse {
    match state.get_handler.handle(id).await {
        Ok(entertainer) => Json(entertainer).into_response(),
        Err(error) => error.into_response(),
    }
}
