//! HTTP Error Handling
//!
//! 业务错误以 HTTP 200 + errno 的形式返回（前端约定），
//! errno 区分"无数据/未命中"（404）、上游抓取失败（502）与
//! 源数据损坏（422），方便观测侧分辨"网络断了"和"源站改版了"

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const SOURCE_CORRUPTED: i32 = 422;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const UPSTREAM_ERROR: i32 = 502;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// 源站抓取失败（基础设施瞬时失败）
    Upstream(String),
    /// 解码失败或正文容器缺失（数据完整性失败）
    SourceCorrupted(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = errno::NOT_FOUND, error = %msg, "Resource not found");
                (
                    StatusCode::OK,
                    ErrorResponse::new(errno::NOT_FOUND, msg.clone()),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                (
                    StatusCode::OK,
                    ErrorResponse::new(errno::BAD_REQUEST, msg.clone()),
                )
            }
            ApiError::Upstream(msg) => {
                tracing::error!(errno = errno::UPSTREAM_ERROR, error = %msg, "Upstream fetch failed");
                (
                    StatusCode::OK,
                    ErrorResponse::new(errno::UPSTREAM_ERROR, msg.clone()),
                )
            }
            ApiError::SourceCorrupted(msg) => {
                tracing::error!(errno = errno::SOURCE_CORRUPTED, error = %msg, "Source page shape changed");
                (
                    StatusCode::OK,
                    ErrorResponse::new(errno::SOURCE_CORRUPTED, msg.clone()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = errno::INTERNAL_ERROR, error = %msg, "Internal server error");
                (
                    StatusCode::OK,
                    ErrorResponse::new(errno::INTERNAL_ERROR, msg.clone()),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<crate::application::RetrievalError> for ApiError {
    fn from(e: crate::application::RetrievalError) -> Self {
        use crate::application::RetrievalError;

        match &e {
            RetrievalError::Repository(_) => ApiError::Internal(e.to_string()),
            RetrievalError::Fetch(_) => ApiError::Upstream(e.to_string()),
            RetrievalError::Decode(_) | RetrievalError::Extraction(_) => {
                ApiError::SourceCorrupted(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DecodeError, FetchError};
    use crate::application::RetrievalError;

    #[test]
    fn test_fetch_error_maps_to_upstream() {
        let api: ApiError = RetrievalError::from(FetchError::Timeout).into();
        assert!(matches!(api, ApiError::Upstream(_)));
    }

    #[test]
    fn test_decode_error_maps_to_source_corrupted() {
        let api: ApiError =
            RetrievalError::from(DecodeError::MalformedSequence("Shift_JIS".into())).into();
        assert!(matches!(api, ApiError::SourceCorrupted(_)));
    }
}
