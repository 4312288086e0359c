//! 服务配置模块
//!
//! 从配置目录读取 `settings.yaml`，并在启动时应用一次环境变量覆盖。

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;
use crate::github::{GitHubClientConfig, DEFAULT_API_URL};

/// 默认端口号
pub const DEFAULT_PORT: u16 = 8000;

/// 配置文件名
const CONFIG_FILENAME: &str = "settings.yaml";

/// 配置目录名
const CONFIG_DIR_NAME: &str = "contribution-stats";

/// GitHub Token 环境变量
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// 端口环境变量
pub const PORT_ENV: &str = "CONTRIBUTION_STATS_PORT";

/// 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP 端口
    pub port: u16,
    /// 监听地址
    pub bind_address: IpAddr,
    /// GitHub GraphQL 端点
    pub github_api_url: String,
    /// GitHub Bearer Token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
    /// 未指定 `year` 参数时使用的年份，为空则取当前年份 (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_year: Option<i32>,
    /// 上游请求超时（秒）
    pub request_timeout_secs: u64,
    /// 日志级别过滤器
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: IpAddr::from([127, 0, 0, 1]),
            github_api_url: DEFAULT_API_URL.to_string(),
            github_token: None,
            default_year: None,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// 从配置目录加载配置
    ///
    /// # Arguments
    /// * `config_dir` - 配置目录路径
    ///
    /// # Returns
    /// 文件不存在时返回默认配置；无法读取或解析时返回 `AppError::Config`，
    /// 由调用方决定是否回退到默认配置。
    pub fn load(config_dir: &Path) -> Result<Self, AppError> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("Invalid {}: {}", config_path.display(), e))
        })
    }

    /// 保存配置到配置目录
    pub fn save(&self, config_dir: &Path) -> Result<(), AppError> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        // 确保目录存在
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)?;
        Ok(())
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 通常为 `std::env::var`，测试中可传入固定映射。
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            self.github_token = Some(token);
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("{} is not a valid port: {}", PORT_ENV, port)))?;
        }

        Ok(())
    }

    /// 验证端口是否有效
    ///
    /// 端口必须在 1024-65535 范围内
    pub fn validate_port(port: u16) -> Result<(), AppError> {
        if port < 1024 {
            return Err(AppError::Config(
                "Port must be >= 1024 (non-privileged ports)".to_string(),
            ));
        }
        Ok(())
    }

    /// 未指定年份时的默认年份
    pub fn resolve_default_year(&self) -> i32 {
        self.default_year.unwrap_or_else(|| Utc::now().year())
    }

    /// 构造 GitHub 客户端配置
    pub fn github_client_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            api_url: self.github_api_url.clone(),
            token: self.github_token.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// 默认配置目录 (`<config_dir>/contribution-stats`)
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
    }
}
