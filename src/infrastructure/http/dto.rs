//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::novel::{NovelInfo, RankedNovel};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Novel DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetTextRequest {
    pub work_id: i64,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub work_id: i64,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankingRequest {
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct RankedNovelResponse {
    pub rank: u32,
    pub work_id: i64,
    pub title: String,
    pub author_surname: String,
    pub author_given_name: String,
    pub total_access_count: i64,
}

impl From<RankedNovel> for RankedNovelResponse {
    fn from(ranked: RankedNovel) -> Self {
        Self {
            rank: ranked.rank,
            work_id: ranked.novel.work_id.value(),
            title: ranked.novel.title,
            author_surname: ranked.novel.author_surname,
            author_given_name: ranked.novel.author_given_name,
            total_access_count: ranked.novel.total_access_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub entries: Vec<RankedNovelResponse>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct NovelInfoResponse {
    pub work_id: i64,
    pub title: String,
    pub author_surname: String,
    pub author_given_name: String,
}

impl From<NovelInfo> for NovelInfoResponse {
    fn from(info: NovelInfo) -> Self {
        Self {
            work_id: info.work_id.value(),
            title: info.title,
            author_surname: info.author_surname,
            author_given_name: info.author_given_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub novels: Vec<NovelInfoResponse>,
}
