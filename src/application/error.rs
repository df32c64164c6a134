//! 应用层错误定义
//!
//! 检索管线的统一错误类型。
//! "不存在"（作品编号未命中、排行榜无数据、搜索无结果）不是错误，
//! 由 Option / 空集合表达；这里只收容真正的失败。

use thiserror::Error;

use crate::application::ports::{DecodeError, ExtractError, FetchError, RepositoryError};

/// 检索错误
///
/// 分两类:
/// - 基础设施瞬时失败: [`Repository`](Self::Repository)、[`Fetch`](Self::Fetch)
/// - 数据完整性失败: [`Decode`](Self::Decode)、[`Extraction`](Self::Extraction)
///
/// 两类对可观测性有不同含义："网络断了" vs "源站改版了"
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// 仓储/事务失败
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// 源站抓取失败
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// 遗留编码解码失败
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// 正文抽取失败
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),
}

impl RetrievalError {
    /// 是否属于数据完整性失败（区别于基础设施瞬时失败）
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Extraction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let fetch: RetrievalError = FetchError::Timeout.into();
        assert!(!fetch.is_data_integrity());

        let decode: RetrievalError =
            DecodeError::MalformedSequence("Shift_JIS".to_string()).into();
        assert!(decode.is_data_integrity());

        let extract: RetrievalError =
            ExtractError::BodyNotFound("div.main_text".to_string()).into();
        assert!(extract.is_data_integrity());

        let repo: RetrievalError =
            RepositoryError::DatabaseError("locked".to_string()).into();
        assert!(!repo.is_data_integrity());
    }
}
