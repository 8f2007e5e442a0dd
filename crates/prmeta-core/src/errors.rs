use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(#[from] Error400),
}

#[derive(Debug, thiserror::Error)]
pub enum Error400 {
    #[error("Invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request has neither an absolute uri nor a Host header")]
    MissingHost,

    #[error("Invalid header string data {0}")]
    InvalidHeaderString(http::header::HeaderName),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        match self {
            Self::BadRequest(e) => {
                tracing::debug!(error = %e, "rejecting request");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
        }
    }
}
