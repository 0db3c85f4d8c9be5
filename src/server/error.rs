use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use super::types::ErrorResponse;
use crate::error::ScentError;

/// API错误类型
pub struct AppError(pub ScentError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScentError::DataUnavailable { .. } | ScentError::ServiceUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ScentError::NotFound(_) => StatusCode::NOT_FOUND,
            ScentError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ScentError::Inconsistent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 用于指标标签的错误名称
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            ScentError::DataUnavailable { .. } | ScentError::ServiceUnavailable => "unavailable",
            ScentError::NotFound(_) => "not_found",
            ScentError::InvalidArgument(_) => "invalid_argument",
            ScentError::Inconsistent(_) => "inconsistent",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("请求失败: {}", self.0);
        }
        (status, Json(ErrorResponse { detail: self.0.to_string() })).into_response()
    }
}

impl From<ScentError> for AppError {
    fn from(err: ScentError) -> Self {
        Self(err)
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
