//! HTTP 路由处理器
//!
//! 实现 /contributions_graph、/account_stats 与 /health 端点

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::analytics::calculator::{compute_stats, contribution_weeks};
use crate::analytics::{Day, StatsResult};
use crate::github::CalendarSource;

/// 可查询的最早年份（GitHub 上线于 2008 年）
pub const MIN_YEAR: i32 = 2008;

/// 可查询的最晚年份
pub const MAX_YEAR: i32 = 9999;

/// 共享状态
pub struct AppState {
    /// 贡献日历来源
    pub source: Arc<dyn CalendarSource>,
    /// 未指定 year 参数时使用的年份
    pub default_year: i32,
}

/// 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    /// GitHub 用户名
    pub username: Option<String>,
    /// 年份（可选）
    pub year: Option<String>,
}

impl CalendarQuery {
    /// 获取去除首尾空白的用户名，缺失或为空时报错
    pub fn username(&self) -> Result<&str, ApiError> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ApiError::MissingUsername)
    }

    /// 解析年份，未提供时使用默认年份
    pub fn year(&self, default_year: i32) -> Result<i32, ApiError> {
        let Some(raw) = self.year.as_deref().map(str::trim).filter(|y| !y.is_empty()) else {
            return Ok(default_year);
        };

        match raw.parse::<i32>() {
            Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
            _ => Err(ApiError::InvalidYear(raw.to_string())),
        }
    }
}

/// GET /contributions_graph
///
/// 返回按周分组的原始贡献日历
pub async fn contributions_graph(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<Vec<Day>>>, ApiError> {
    let username = query.username()?;
    let year = query.year(state.default_year)?;

    let calendar = state.source.fetch_calendar(username, year).await?;
    log::info!(
        "Served {} calendar for {} ({} weeks)",
        year,
        username,
        calendar.weeks.len()
    );

    Ok(Json(contribution_weeks(&calendar)))
}

/// GET /account_stats
///
/// 并发拉取当年与上一年的日历，计算统计数据并对比两年总数
pub async fn account_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<StatsResult>, ApiError> {
    let username = query.username()?;
    let year = query.year(state.default_year)?;

    let (current, previous) = futures::try_join!(
        state.source.fetch_calendar(username, year),
        state.source.fetch_calendar(username, year - 1),
    )?;

    let stats = compute_stats(&current, Some(&previous));
    if let Some(comparison) = &stats.comparison {
        log::info!(
            "Served {} stats for {}: {} contributions, {} {} than {}",
            year,
            username,
            stats.total_contributions,
            comparison.contribution_difference,
            comparison.adjective.as_str(),
            year - 1
        );
    }

    Ok(Json(stats))
}

/// GET /health
///
/// 健康检查端点
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "contribution-stats"
        })),
    )
}
