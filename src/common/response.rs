use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope shared by every catalog endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

pub struct ApiSuccess<T>(pub ApiResponse<T>, pub StatusCode);

impl<T: Serialize> ApiSuccess<T> {
    pub fn ok(data: T, message: &str) -> Self {
        Self(ApiResponse::success(data, message), StatusCode::OK)
    }

    pub fn created(data: T, message: &str) -> Self {
        Self(ApiResponse::success(data, message), StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let Self(body, status) = self;
        (status, Json(body)).into_response()
    }
}

pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(message, status) = self;
        (status, Json(ApiResponse::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_carries_data() {
        let body = serde_json::to_value(ApiResponse::success(vec![1, 2], "done")).unwrap();
        assert_eq!(body, json!({ "status": "success", "message": "done", "data": [1, 2] }));
    }

    #[test]
    fn error_envelope_has_null_data() {
        let body = serde_json::to_value(ApiResponse::error("boom")).unwrap();
        assert_eq!(body, json!({ "status": "error", "message": "boom", "data": null }));
    }

    #[test]
    fn created_sets_status_code() {
        let response = ApiSuccess::created("x", "made").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
