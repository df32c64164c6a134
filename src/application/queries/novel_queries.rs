//! Novel Queries
//!
//! 对外暴露的三个查询入口的参数定义

use crate::domain::novel::WorkId;

/// 获取小说全文查询
#[derive(Debug, Clone)]
pub struct GetNovelText {
    pub work_id: WorkId,
}

/// 获取访问量排行查询
#[derive(Debug, Clone)]
pub struct GetRanking {
    /// 取前 limit 名；`<= 0` 视为无数据
    pub limit: i64,
}

/// 按作者姓名搜索查询
#[derive(Debug, Clone)]
pub struct SearchNovels {
    pub query: String,
}
