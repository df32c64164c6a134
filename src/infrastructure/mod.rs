//! 基础设施层
//!
//! - http: RESTful API（axum）
//! - persistence: SQLite 只读查询实现
//! - adapters: 源站抓取（reqwest）、Shift_JIS 解码（encoding_rs）、
//!   正文抽取（scraper）

pub mod adapters;
pub mod http;
pub mod persistence;
