//! Shiori - 青空文库小说阅读/发现站后端
//!
//! 架构设计: DDD + CQRS（只有查询侧）+ Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说元数据（只读）、排行/搜索投影
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NovelQuery, SourceFetcher, TextDecoder, BodyExtractor）
//! - Queries: 三个查询入口（全文 / 排行 / 搜索）及处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 只读查询（快照事务）
//! - Adapters: 源站抓取、Shift_JIS 解码、正文抽取
//!
//! 写入侧（作品采集、访问量统计）是外部协作方，本 crate 不落任何数据。

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
