use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::osm_processing::OsmError;

pub struct ResponseError(Response);

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        self.0
    }
}

impl<E> From<E> for ResponseError
where
    E: Into<color_eyre::eyre::Error>,
{
    fn from(value: E) -> Self {
        Self(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Into::<color_eyre::eyre::Error>::into(value).to_string(),
            )
                .into_response(),
        )
    }
}

impl ResponseError {
    pub fn with_status<T>(status_code: StatusCode, data: T) -> Self
    where
        (StatusCode, T): IntoResponse,
    {
        ResponseError((status_code, data).into_response())
    }

    pub fn not_found<T>(data: T) -> Self
    where
        (StatusCode, T): IntoResponse,
    {
        Self::with_status(StatusCode::NOT_FOUND, data)
    }

    pub fn bad_request<T>(data: T) -> Self
    where
        (StatusCode, T): IntoResponse,
    {
        Self::with_status(StatusCode::BAD_REQUEST, data)
    }

    /// Unknown nodes are 404s, incomplete ones are the client's to fix.
    pub fn osm(err: OsmError) -> Self {
        match err {
            OsmError::NodeNotFound(_) => Self::not_found(err.to_string()),
            OsmError::MissingField { .. } => Self::bad_request(err.to_string()),
        }
    }
}

pub type Result<T, E = ResponseError> = axum::response::Result<T, E>;
