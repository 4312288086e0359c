//! GitHub GraphQL 请求与响应结构

use serde::{Deserialize, Serialize};

use crate::analytics::Calendar;

/// 贡献日历查询
pub const CONTRIBUTION_QUERY: &str = r#"
query($userName: String!, $fromDate: DateTime!, $toDate: DateTime!) {
    user(login: $userName) {
        contributionsCollection(from: $fromDate, to: $toDate) {
            contributionCalendar {
                totalContributions
                weeks {
                    contributionDays {
                        contributionCount
                        date
                    }
                }
            }
        }
    }
}
"#;

/// GraphQL 请求体
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: CalendarVariables<'a>,
}

/// 查询变量，时间窗口覆盖整年
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarVariables<'a> {
    pub user_name: &'a str,
    pub from_date: String,
    pub to_date: String,
}

impl<'a> CalendarVariables<'a> {
    /// 构造 `[YYYY-01-01T00:00:00Z, YYYY-12-31T23:59:59Z]` 窗口
    pub fn for_year(user_name: &'a str, year: i32) -> Self {
        Self {
            user_name,
            from_date: format!("{:04}-01-01T00:00:00Z", year),
            to_date: format!("{:04}-12-31T23:59:59Z", year),
        }
    }
}

/// GraphQL 响应
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    #[serde(default)]
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserNode {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionsCollection {
    pub contribution_calendar: Calendar,
}

/// GraphQL 错误条目
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    /// 错误类型，例如 `NOT_FOUND`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl GraphQlError {
    pub fn is_not_found(&self) -> bool {
        self.kind.as_deref() == Some("NOT_FOUND")
    }
}
