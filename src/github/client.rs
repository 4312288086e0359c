//! GitHub 贡献日历客户端
//!
//! 通过 GraphQL API 拉取指定用户某一年的贡献日历，并校验其结构。

use std::time::Duration;

use async_trait::async_trait;
use chrono::Datelike;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use super::error::FetchError;
use super::types::{CalendarVariables, GraphQlRequest, GraphQlResponse, CONTRIBUTION_QUERY};
use crate::analytics::Calendar;

/// 默认 GitHub GraphQL 端点
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// 每周最多的天数
const DAYS_PER_WEEK: usize = 7;

/// 错误消息中保留的响应体长度
const MAX_ERROR_BODY: usize = 200;

/// 贡献日历来源
///
/// 用于解耦 HTTP 层和 GitHub API，测试中可替换为内存实现。
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// 获取用户某一年的贡献日历
    ///
    /// # Arguments
    /// * `username` - GitHub 登录名
    /// * `year` - 年份
    async fn fetch_calendar(&self, username: &str, year: i32) -> Result<Calendar, FetchError>;
}

/// GitHub 客户端配置
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// GraphQL 端点
    pub api_url: String,
    /// Bearer Token（可选，未配置时不发送 Authorization）
    pub token: Option<String>,
    /// 请求超时
    pub timeout: Duration,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// GitHub GraphQL 客户端
pub struct GitHubClient {
    http_client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// 根据配置创建客户端
    pub fn new(config: GitHubClientConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(http_client, config.api_url, config.token))
    }

    /// 使用自定义 HTTP 客户端创建
    pub fn with_client(client: reqwest::Client, api_url: String, token: Option<String>) -> Self {
        Self {
            http_client: client,
            api_url,
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// 是否配置了 Token
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn build_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("contribution-stats/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FetchError::NetworkError(format!("Invalid token header: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl CalendarSource for GitHubClient {
    async fn fetch_calendar(&self, username: &str, year: i32) -> Result<Calendar, FetchError> {
        let request = GraphQlRequest {
            query: CONTRIBUTION_QUERY,
            variables: CalendarVariables::for_year(username, year),
        };

        log::debug!("Fetching {} contribution calendar for {}", year, username);

        let response = self
            .http_client
            .post(&self.api_url)
            .headers(self.build_headers()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = String::from_utf8_lossy(&body);
            let message: String = message.chars().take(MAX_ERROR_BODY).collect();
            log::warn!("GitHub API returned {} for {}: {}", status, username, message);
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        parse_calendar_response(username, year, &body)
    }
}

/// 解析 GraphQL 响应并提取贡献日历
///
/// `NOT_FOUND` 错误或 `data.user` 为空视为用户不存在；缺少 `data` 或日历
/// 结构不合法时返回 `MalformedCalendar`；其余 GraphQL 错误返回 `ApiError`。
pub fn parse_calendar_response(
    username: &str,
    year: i32,
    body: &[u8],
) -> Result<Calendar, FetchError> {
    let response: GraphQlResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedCalendar(e.to_string()))?;

    let user = match response.data {
        Some(data) => data.user,
        None if response.errors.is_empty() => {
            return Err(FetchError::MalformedCalendar(
                "response has no data".to_string(),
            ));
        }
        None => None,
    };

    let Some(user) = user else {
        if response.errors.is_empty() || response.errors.iter().any(|e| e.is_not_found()) {
            return Err(FetchError::UserNotFound(username.to_string()));
        }
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(FetchError::ApiError(messages.join("; ")));
    };

    if !response.errors.is_empty() {
        log::warn!(
            "GitHub API returned {} partial error(s) for {}",
            response.errors.len(),
            username
        );
    }

    let calendar = user.contributions_collection.contribution_calendar;
    validate_calendar(&calendar, year)?;
    Ok(calendar)
}

/// 校验日历结构
///
/// 要求：至少一周；每周 1..=7 天；所有日期位于请求的年份内。
pub fn validate_calendar(calendar: &Calendar, year: i32) -> Result<(), FetchError> {
    if calendar.weeks.is_empty() {
        return Err(FetchError::MalformedCalendar(
            "calendar contains no weeks".to_string(),
        ));
    }

    for (index, week) in calendar.weeks.iter().enumerate() {
        if week.days.is_empty() || week.days.len() > DAYS_PER_WEEK {
            return Err(FetchError::MalformedCalendar(format!(
                "week {} has {} days",
                index,
                week.days.len()
            )));
        }

        if let Some(day) = week.days.iter().find(|day| day.date.year() != year) {
            return Err(FetchError::MalformedCalendar(format!(
                "date {} is outside {}",
                day.date, year
            )));
        }
    }

    Ok(())
}
