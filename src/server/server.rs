//! HTTP Server 实现
//!
//! 使用 axum 创建 HTTP Server，支持启动和优雅关闭。

use axum::{routing::get, Router};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use super::config::ServiceConfig;
use super::handlers::{self, AppState};
use crate::error::AppError;
use crate::github::CalendarSource;

/// Server 控制句柄
///
/// 用于控制 Server 的生命周期
pub struct ServerHandle {
    /// 关闭信号发送器
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// 当前运行的地址
    addr: SocketAddr,
}

impl ServerHandle {
    /// 获取当前端口
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// 关闭 Server
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// 创建路由
///
/// CORS 允许任意来源、方法和请求头
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contributions_graph", get(handlers::contributions_graph))
        .route("/account_stats", get(handlers::account_stats))
        .route("/health", get(handlers::health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// 贡献统计 HTTP Server
pub struct StatsServer {
    state: Arc<AppState>,
    bind_address: IpAddr,
    default_port: u16,
}

impl StatsServer {
    /// 创建新的 Server 实例
    pub fn new(source: Arc<dyn CalendarSource>, config: &ServiceConfig) -> Self {
        Self {
            state: Arc::new(AppState {
                source,
                default_year: config.resolve_default_year(),
            }),
            bind_address: config.bind_address,
            default_port: config.port,
        }
    }

    /// 启动 Server
    ///
    /// # Arguments
    /// * `port` - 可选端口号，如果不提供则使用配置中的端口
    ///
    /// # Returns
    /// ServerHandle 用于控制 Server 生命周期
    pub async fn start(&self, port: Option<u16>) -> Result<ServerHandle, AppError> {
        let port = port.unwrap_or(self.default_port);

        // 验证端口
        ServiceConfig::validate_port(port)?;

        let app = build_router(self.state.clone());

        let addr = SocketAddr::new(self.bind_address, port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::startup(format!("Failed to bind to {}: {}", addr, e)))?;

        // 创建关闭信号
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        // 在后台运行 Server
        tokio::spawn(async move {
            let graceful = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });

            if let Err(e) = graceful.await {
                log::error!("Server error: {}", e);
            }
            log::info!("Server on {} stopped", addr);
        });

        log::info!("Listening on http://{}", addr);

        Ok(ServerHandle {
            shutdown_tx: Some(shutdown_tx),
            addr,
        })
    }

    /// 检查端口是否可用
    pub async fn check_port_available(port: u16) -> bool {
        tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port)))
            .await
            .is_ok()
    }
}
