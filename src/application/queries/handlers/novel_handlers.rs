//! Novel Query Handlers
//!
//! 检索管线的编排层。每个 handle 调用:
//! 1. 恰好开启一个一致性读快照
//! 2. 在快照内完成本次操作的全部读取
//! 3. 任意出口路径（成功 / 未命中 / 失败）都释放快照
//!
//! 调用之间不共享可变状态，可并发执行。
//! 不做重试、不做缓存：同一 work_id 的重复调用每次都重新抓取解码。

use std::sync::Arc;

use crate::application::error::RetrievalError;
use crate::application::ports::{
    BodyExtractorPort, NovelQueryPort, Snapshot, SourceFetcherPort, TextDecoderPort,
};
use crate::application::queries::{GetNovelText, GetRanking, SearchNovels};
use crate::domain::novel::{NovelInfo, RankedNovel, WorkId};

/// GetNovelText Handler
///
/// 查 URL → 抓取 → 解码 → 抽取正文。
/// 作品编号未命中返回 Ok(None)，且不发起任何网络请求；
/// 管线中任一步失败立即中止，不返回部分文本。
pub struct GetNovelTextHandler {
    novel_query: Arc<dyn NovelQueryPort>,
    fetcher: Arc<dyn SourceFetcherPort>,
    decoder: Arc<dyn TextDecoderPort>,
    extractor: Arc<dyn BodyExtractorPort>,
    /// 源站编码标签（青空文库为 Shift_JIS），来自配置
    source_encoding: String,
}

impl GetNovelTextHandler {
    pub fn new(
        novel_query: Arc<dyn NovelQueryPort>,
        fetcher: Arc<dyn SourceFetcherPort>,
        decoder: Arc<dyn TextDecoderPort>,
        extractor: Arc<dyn BodyExtractorPort>,
        source_encoding: impl Into<String>,
    ) -> Self {
        Self {
            novel_query,
            fetcher,
            decoder,
            extractor,
            source_encoding: source_encoding.into(),
        }
    }

    pub async fn handle(&self, query: GetNovelText) -> Result<Option<String>, RetrievalError> {
        let mut snapshot = self.novel_query.begin_snapshot().await?;

        // 先收管线结果再释放快照，保证所有出口路径都释放
        let outcome = self.text_in_snapshot(&mut snapshot, query.work_id).await;
        let released = snapshot.release().await;

        let text = outcome?;
        released?;
        Ok(text)
    }

    async fn text_in_snapshot(
        &self,
        snapshot: &mut Snapshot,
        work_id: WorkId,
    ) -> Result<Option<String>, RetrievalError> {
        let Some(novel) = self.novel_query.find_by_work_id(snapshot, work_id).await? else {
            tracing::debug!(work_id = %work_id, "Novel not found, skipping fetch");
            return Ok(None);
        };

        tracing::debug!(
            work_id = %work_id,
            url = %novel.aozora_url,
            "Fetching novel text from source"
        );

        let bytes = self.fetcher.fetch(&novel.aozora_url).await?;
        let html = self.decoder.decode(&bytes, &self.source_encoding)?;
        let body = self.extractor.extract_body(&html)?;

        tracing::info!(
            work_id = %work_id,
            raw_bytes = bytes.len(),
            body_chars = body.chars().count(),
            "Novel text retrieved"
        );

        Ok(Some(body))
    }
}

/// GetRanking Handler
///
/// 排行为空（包括 limit <= 0）返回 Ok(None)，表示"无数据"
pub struct GetRankingHandler {
    novel_query: Arc<dyn NovelQueryPort>,
}

impl GetRankingHandler {
    pub fn new(novel_query: Arc<dyn NovelQueryPort>) -> Self {
        Self { novel_query }
    }

    pub async fn handle(
        &self,
        query: GetRanking,
    ) -> Result<Option<Vec<RankedNovel>>, RetrievalError> {
        let mut snapshot = self.novel_query.begin_snapshot().await?;

        let outcome = self
            .novel_query
            .ranked_by_access_count(&mut snapshot, query.limit)
            .await;
        let released = snapshot.release().await;

        let rankings = outcome?;
        released?;

        if rankings.is_empty() {
            return Ok(None);
        }
        Ok(Some(rankings))
    }
}

/// SearchNovels Handler
///
/// 空结果集是合法的成功结果，原样返回（区别于排行的"无数据"）
pub struct SearchNovelsHandler {
    novel_query: Arc<dyn NovelQueryPort>,
}

impl SearchNovelsHandler {
    pub fn new(novel_query: Arc<dyn NovelQueryPort>) -> Self {
        Self { novel_query }
    }

    pub async fn handle(&self, query: SearchNovels) -> Result<Vec<NovelInfo>, RetrievalError> {
        let mut snapshot = self.novel_query.begin_snapshot().await?;

        let outcome = self
            .novel_query
            .search_by_author(&mut snapshot, &query.query)
            .await;
        let released = snapshot.release().await;

        let novels = outcome?;
        released?;
        Ok(novels)
    }
}
