use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Uniform envelope wrapped around every response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse {
    pub status: bool,
    pub data: Value,
    pub message: String,
    pub response_code: u16,
}

impl AppResponse {
    pub fn success(data: impl Serialize) -> Self {
        Self::with_code(data, StatusCode::OK)
    }

    pub fn created(data: impl Serialize) -> Self {
        Self::with_code(data, StatusCode::CREATED)
    }

    fn with_code(data: impl Serialize, code: StatusCode) -> Self {
        Self {
            status: true,
            data: serde_json::to_value(data).unwrap_or(Value::Null),
            message: String::new(),
            response_code: code.as_u16(),
        }
    }

    pub fn failure(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: false,
            data: json!({}),
            message: message.into(),
            response_code: code.as_u16(),
        }
    }
}

impl IntoResponse for AppResponse {
    fn into_response(self) -> Response {
        let code = StatusCode::from_u16(self.response_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (code, Json(self)).into_response()
    }
}
