//! HTTP 接口错误类型定义

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::github::FetchError;

/// HTTP 接口错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 缺少 username 参数
    #[error("Username is required")]
    MissingUsername,

    /// year 参数不合法
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    /// 拉取贡献日历失败
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl ApiError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingUsername => "MISSING_USERNAME",
            Self::InvalidYear(_) => "INVALID_YEAR",
            Self::Fetch(FetchError::UserNotFound(_)) => "USER_NOT_FOUND",
            Self::Fetch(FetchError::MalformedCalendar(_)) => "MALFORMED_CALENDAR",
            Self::Fetch(_) => "FETCH_FAILED",
        }
    }

    /// 获取对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUsername | Self::InvalidYear(_) => StatusCode::BAD_REQUEST,
            Self::Fetch(FetchError::UserNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Rejected request: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
            code: self.code(),
        };

        (status, Json(body)).into_response()
    }
}
