//! Novel Context - Entities
//!
//! 本上下文对小说数据只读，创建/更新由外部采集器负责
//!
//! 不变量:
//! - work_id 唯一且不可变
//! - rank 为 1 起始的名次，仅作为查询结果存在，不落库

use serde::{Deserialize, Serialize};

use super::WorkId;

/// 小说元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    /// 作品编号
    pub work_id: WorkId,
    /// 标题
    pub title: String,
    /// 作者姓
    pub author_surname: String,
    /// 作者名
    pub author_given_name: String,
    /// 青空文库正文页 URL
    pub aozora_url: String,
    /// 累计访问次数（由外部统计侧维护）
    pub total_access_count: i64,
}

impl Novel {
    /// 作者全名（姓 + 名）
    pub fn author_full_name(&self) -> String {
        format!("{}{}", self.author_surname, self.author_given_name)
    }
}

/// 带名次的小说 - 排行榜查询结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedNovel {
    /// 名次（1 起始，按访问次数降序）
    pub rank: u32,
    #[serde(flatten)]
    pub novel: Novel,
}

/// 搜索结果投影 - 只含展示所需字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelInfo {
    pub work_id: WorkId,
    pub title: String,
    pub author_surname: String,
    pub author_given_name: String,
}

impl From<Novel> for NovelInfo {
    fn from(novel: Novel) -> Self {
        Self {
            work_id: novel.work_id,
            title: novel.title,
            author_surname: novel.author_surname,
            author_given_name: novel.author_given_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_novel() -> Novel {
        Novel {
            work_id: WorkId::new(1),
            title: "吾輩は猫である".to_string(),
            author_surname: "夏目".to_string(),
            author_given_name: "漱石".to_string(),
            aozora_url: "https://www.aozora.gr.jp/cards/000148/files/789_14547.html".to_string(),
            total_access_count: 120,
        }
    }

    #[test]
    fn test_author_full_name() {
        assert_eq!(sample_novel().author_full_name(), "夏目漱石");
    }

    #[test]
    fn test_novel_info_projection() {
        let info = NovelInfo::from(sample_novel());
        assert_eq!(info.work_id, WorkId::new(1));
        assert_eq!(info.title, "吾輩は猫である");
        assert_eq!(info.author_surname, "夏目");
        assert_eq!(info.author_given_name, "漱石");
    }
}
