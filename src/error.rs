//! Unified application error types
//!
//! Errors raised while configuring and starting the service. Request-level
//! failures are reported through [`ApiError`](crate::server::ApiError).

use thiserror::Error;

use crate::github::FetchError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("配置错误: {0}")]
    Config(String),

    /// Server startup error
    #[error("服务器启动失败: {0}")]
    Startup(String),

    /// GitHub client error
    #[error("GitHub 客户端错误: {0}")]
    GitHub(#[from] FetchError),

    /// File operation error
    #[error("文件操作错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a startup error
    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }
}
