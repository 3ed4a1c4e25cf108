use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use handlebars::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to render the page: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to serialize the map: {0}")]
    MapData(#[from] serde_json::Error),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(task = "render", error = %self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong while drawing the page, please try again!",
        )
            .into_response()
    }
}
