use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::modules::entertainers::adapters::outbound::entertainer_store::StoreError;
use crate::modules::entertainers::core::entertainer::{EntertainerId, ValidationError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    #[error("entertainer {0} not found")]
    NotFound(EntertainerId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::InvalidInput(reason) => {
                (StatusCode::BAD_REQUEST, reason.to_string()).into_response()
            }
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApplicationError::Store(error) => {
                tracing::error!(%error, "entertainer store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApplicationError::InvalidInput(ValidationError::IdMismatch), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::NotFound(3), StatusCode::NOT_FOUND)]
    #[case(
        ApplicationError::Store(StoreError::Backend("down".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn it_should_map_each_error_to_its_status(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
    ) {
        assert_eq!(error.into_response().status(), status);
    }

    #[rstest]
    fn it_should_keep_the_validation_message() {
        let error = ApplicationError::from(ValidationError::StageNameRequired);
        assert_eq!(error.to_string(), "Stage name is required");
    }
}
