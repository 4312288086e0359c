//! HTTP Server 模块
//!
//! 提供 `/contributions_graph` 与 `/account_stats` 两个 GET 接口，
//! 从 GitHub 拉取贡献日历并返回原始日历或统计结果。

mod config;
mod error;
mod handlers;
mod server;

pub use config::{ServiceConfig, DEFAULT_PORT, PORT_ENV, TOKEN_ENV};
pub use error::{ApiError, ErrorBody};
pub use handlers::{AppState, CalendarQuery, MAX_YEAR, MIN_YEAR};
pub use server::{build_router, ServerHandle, StatsServer};
