//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（NovelQuery、SourceFetcher、TextDecoder、BodyExtractor）
//! - queries: 三个查询入口（全文 / 排行 / 搜索）及处理器
//! - error: 检索错误分类（基础设施瞬时失败 vs 数据完整性失败）

pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::RetrievalError;

pub use ports::{
    // Repository
    NovelQueryPort,
    RepositoryError,
    Snapshot,
    // Source fetcher
    FetchError,
    SourceFetcherPort,
    // Text processing
    BodyExtractorPort,
    DecodeError,
    ExtractError,
    TextDecoderPort,
};

pub use queries::{
    handlers::{GetNovelTextHandler, GetRankingHandler, SearchNovelsHandler},
    GetNovelText,
    GetRanking,
    SearchNovels,
};
