//! HTTP Source Fetcher - 抓取青空文库正文页
//!
//! 实现 SourceFetcherPort trait，通过 HTTP GET 拉取原始字节。
//! 响应体不在此处解码：源站是 Shift_JIS，解码交给 EncodingDecoder。
//! 不做重试；全文按需抓取，失败直接上抛由调用方决定。

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{FetchError, SourceFetcherPort};

/// HTTP 抓取客户端配置
#[derive(Debug, Clone)]
pub struct HttpSourceFetcherConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent 头
    pub user_agent: String,
}

impl Default for HttpSourceFetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("shiori/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSourceFetcherConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 抓取客户端
pub struct HttpSourceFetcher {
    client: Client,
}

impl HttpSourceFetcher {
    /// 创建新的抓取客户端
    pub fn new(config: HttpSourceFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, FetchError> {
        Self::new(HttpSourceFetcherConfig::default())
    }
}

#[async_trait]
impl SourceFetcherPort for HttpSourceFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "Fetching source page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::NetworkError(format!("Cannot connect to source: {}", e))
            } else {
                FetchError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // 读取原始字节。响应体截断/超时也算抓取失败
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to read body: {}", e)))?
            .to_vec();

        tracing::debug!(url = %url, bytes = bytes.len(), "Source page fetched");

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpSourceFetcherConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("shiori/"));
    }

    #[test]
    fn test_config_builder() {
        let config = HttpSourceFetcherConfig::default().with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_client_builds() {
        assert!(HttpSourceFetcher::with_default_config().is_ok());
    }
}
