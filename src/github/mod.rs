//! GitHub 贡献日历模块
//!
//! 负责构造 GraphQL 查询、注入 Bearer Token 并把响应解析为
//! [`Calendar`](crate::analytics::Calendar)。

mod client;
mod error;
mod types;

pub use client::{
    parse_calendar_response, validate_calendar, CalendarSource, GitHubClient,
    GitHubClientConfig, DEFAULT_API_URL,
};
pub use error::FetchError;
pub use types::{CalendarVariables, GraphQlRequest, CONTRIBUTION_QUERY};
