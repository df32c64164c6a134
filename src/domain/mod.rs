//! 领域层
//!
//! 包含 Novel 限界上下文的实体与值对象。
//! 本系统对小说数据只读，写入侧（采集、访问量统计）是外部协作方。

pub mod novel;

pub use novel::{Novel, NovelInfo, RankedNovel, WorkId};
