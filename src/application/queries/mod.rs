//! Application Queries - CQRS 查询侧
//!
//! 本系统只有查询侧：写入（采集、访问量统计）在外部完成

mod novel_queries;

pub mod handlers;

pub use novel_queries::{GetNovelText, GetRanking, SearchNovels};
