//! Shiori - 青空文库小说阅读/发现站后端
//!
//! 三个入口: 全文按需抓取（Shift_JIS 解码 + 正文抽取）、访问量排行、作者搜索

use std::sync::Arc;

use shiori::config::{load_config, print_config};
use shiori::infrastructure::adapters::{
    EncodingDecoder, HttpSourceFetcher, HttpSourceFetcherConfig, MainTextExtractor,
};
use shiori::infrastructure::http::{AppState, HttpServer, ServerConfig};
use shiori::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteNovelRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},shiori={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Shiori - 青空文库阅读站后端");
    print_config(&config);

    // 确保数据库目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库（表结构由迁移保证，数据由外部采集器写入）
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let novel_repo = Arc::new(SqliteNovelRepository::new(pool));

    // 创建源站抓取客户端
    let fetcher_config = HttpSourceFetcherConfig {
        timeout_secs: config.source.timeout_secs,
        user_agent: config.source.user_agent.clone(),
    };
    let fetcher = Arc::new(
        HttpSourceFetcher::new(fetcher_config)
            .map_err(|e| anyhow::anyhow!("Failed to build fetcher: {}", e))?,
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        novel_repo,
        fetcher,
        Arc::new(EncodingDecoder),
        Arc::new(MainTextExtractor),
        config.source.encoding.clone(),
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
