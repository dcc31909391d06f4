use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Uniform `{message, data, filter}` success wrapper. `filter` is only
/// present on list responses, where it echoes the applied search string.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            filter: None,
            status: StatusCode::OK,
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            filter: None,
            status: StatusCode::CREATED,
        }
    }

    pub fn list(message: impl Into<String>, data: T, filter: String) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            filter: Some(filter),
            status: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or path parameter failed to bind.
    #[error("{0}")]
    Bind(String),

    /// No row with the requested primary key.
    #[error("{0}")]
    NotFound(String),

    /// Datastore connection or query failure.
    #[error("{0}")]
    Store(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Bind(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_envelope_serializes_without_filter() {
        let envelope = Envelope::data("Successfully Get Agama By ID : 1", 42);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "Successfully Get Agama By ID : 1", "data": 42 })
        );
    }

    #[test]
    fn list_envelope_echoes_empty_filter() {
        let envelope = Envelope::list("Successfully Get All Agama", vec![1, 2], String::new());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["filter"], "");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn bind_error_maps_to_bad_request() {
        let response = ApiError::Bind("Failed to Bind Input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Agama with ID 9 Not Found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_error_maps_to_500() {
        let response = ApiError::Store("Failed to Get All Agama".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn created_envelope_sets_201() {
        let response = Envelope::created("Successfully Create a Agama", 1).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
