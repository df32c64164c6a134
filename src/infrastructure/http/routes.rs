//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping            GET   健康检查
//! - /api/novel/text      POST  获取小说全文（按需抓取源站）
//! - /api/novel/ranking   POST  访问量排行
//! - /api/novel/search    POST  按作者姓名搜索

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/novel", novel_routes())
}

/// Novel 路由
fn novel_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/text", post(handlers::get_text))
        .route("/ranking", post(handlers::get_ranking))
        .route("/search", post(handlers::search))
}
