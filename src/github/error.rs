//! GitHub 日历获取错误类型定义

use thiserror::Error;

/// 日历获取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络错误（连接失败、超时等）
    #[error("Network error: {0}")]
    NetworkError(String),

    /// GitHub 返回非 2xx 状态码
    #[error("GitHub API returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// GraphQL 层面的错误
    #[error("GitHub API error: {0}")]
    ApiError(String),

    /// 用户不存在
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// 响应缺少预期字段或数据不合法
    #[error("Malformed contribution calendar: {0}")]
    MalformedCalendar(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}
