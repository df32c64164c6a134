//! Source Fetcher Port - 出站端口
//!
//! 定义源站原始字节抓取的抽象接口
//! 具体实现在 infrastructure 层（reqwest HTTP 客户端 / 测试用 Fake）

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误
///
/// 本层不做重试，重试策略（如有）由调用方决定
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 源站抓取端口
#[async_trait]
pub trait SourceFetcherPort: Send + Sync {
    /// 抓取 URL 的原始字节
    ///
    /// 不可达、非 2xx 状态、超时或响应体读取失败均返回 [`FetchError`]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
