//! Repository Ports - 出站端口
//!
//! 定义小说只读查询的抽象接口
//! 具体实现在 infrastructure 层（SQLite）
//!
//! 所有查询都必须在调用方提供的 [`Snapshot`] 内执行，
//! 保证单次逻辑操作内的多次读取看到同一份数据视图。

use async_trait::async_trait;
use sqlx::{Sqlite, SqliteConnection, Transaction};
use thiserror::Error;

use crate::domain::novel::{Novel, NovelInfo, RankedNovel, WorkId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// 一致性读快照
///
/// 包装一个 SQLite 只读事务。SQLite 的 DEFERRED 事务自首次读取起
/// 提供快照隔离（不低于 Repeatable Read），事务存续期间的所有读取
/// 看到同一数据版本。
///
/// 释放规则：每次逻辑操作恰好释放一次。正常路径调用 [`release`](Self::release)
/// 显式回滚（只读事务无需提交）；提前返回或出错时由 sqlx 的
/// Drop 回滚兜底，不会泄漏连接。
pub struct Snapshot {
    tx: Transaction<'static, Sqlite>,
}

impl Snapshot {
    pub(crate) fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    /// 获取事务内连接，供仓储实现执行查询
    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    /// 显式释放快照（回滚只读事务）
    pub async fn release(self) -> Result<(), RepositoryError> {
        self.tx
            .rollback()
            .await
            .map_err(|e| RepositoryError::TransactionError(e.to_string()))
    }
}

/// Novel 只读查询端口
///
/// 全部操作无副作用；返回值不持有快照内部引用，
/// 快照关闭后结果仍然有效。
#[async_trait]
pub trait NovelQueryPort: Send + Sync {
    /// 开启一个一致性读快照
    async fn begin_snapshot(&self) -> Result<Snapshot, RepositoryError>;

    /// 按作品编号查找小说，不存在返回 None（不是错误）
    async fn find_by_work_id(
        &self,
        snapshot: &mut Snapshot,
        work_id: WorkId,
    ) -> Result<Option<Novel>, RepositoryError>;

    /// 按访问次数降序取前 limit 名
    ///
    /// 并列时按 work_id 升序（确定性排序）。
    /// `limit <= 0` 直接返回空集，不发起查询。
    async fn ranked_by_access_count(
        &self,
        snapshot: &mut Snapshot,
        limit: i64,
    ) -> Result<Vec<RankedNovel>, RepositoryError>;

    /// 按作者姓名子串搜索
    ///
    /// 姓或名包含 query 即命中（区分大小写，不做空白归一化）。
    /// 空串直接返回空集，不发起查询（空串不是"匹配全部"）。
    async fn search_by_author(
        &self,
        snapshot: &mut Snapshot,
        query: &str,
    ) -> Result<Vec<NovelInfo>, RepositoryError>;
}
