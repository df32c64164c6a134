//! Application State
//!
//! 包含所有 Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Ports
    BodyExtractorPort,
    // Query handlers
    GetNovelTextHandler,
    GetRankingHandler,
    NovelQueryPort,
    SearchNovelsHandler,
    SourceFetcherPort,
    TextDecoderPort,
};

/// 应用状态
pub struct AppState {
    // ========== Query Handlers ==========
    pub get_text_handler: GetNovelTextHandler,
    pub get_ranking_handler: GetRankingHandler,
    pub search_handler: SearchNovelsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        novel_query: Arc<dyn NovelQueryPort>,
        fetcher: Arc<dyn SourceFetcherPort>,
        decoder: Arc<dyn TextDecoderPort>,
        extractor: Arc<dyn BodyExtractorPort>,
        source_encoding: impl Into<String>,
    ) -> Self {
        Self {
            get_text_handler: GetNovelTextHandler::new(
                novel_query.clone(),
                fetcher,
                decoder,
                extractor,
                source_encoding,
            ),
            get_ranking_handler: GetRankingHandler::new(novel_query.clone()),
            search_handler: SearchNovelsHandler::new(novel_query),
        }
    }
}
