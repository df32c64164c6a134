//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说元数据（只读）
//! - 排行榜/搜索结果投影

mod entities;
mod value_objects;

pub use entities::{Novel, NovelInfo, RankedNovel};
pub use value_objects::WorkId;
