//! Fake Source Fetcher - 用于测试的抓取客户端
//!
//! 返回预先注册的固定页面字节，不实际发起网络请求；
//! 未注册的 URL 返回 HTTP 404，模拟源站缺页

use async_trait::async_trait;
use std::collections::HashMap;

use crate::application::ports::{FetchError, SourceFetcherPort};

/// Fake Source Fetcher
#[derive(Debug, Default)]
pub struct FakeSourceFetcher {
    pages: HashMap<String, Vec<u8>>,
}

impl FakeSourceFetcher {
    /// 创建空的 Fake（任何 URL 都返回 404）
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个 URL 对应的页面字节
    pub fn with_page(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.pages.insert(url.into(), bytes);
        self
    }
}

#[async_trait]
impl SourceFetcherPort for FakeSourceFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "FakeSourceFetcher: serving fixed page");

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::HttpStatus {
                status: 404,
                url: url.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_page_is_served() {
        let fetcher = FakeSourceFetcher::new().with_page("http://src/1", b"hello".to_vec());
        assert_eq!(fetcher.fetch("http://src/1").await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_unregistered_url_is_404() {
        let fetcher = FakeSourceFetcher::new();
        let err = fetcher.fetch("http://src/none").await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { status: 404, .. }));
    }
}
