//! SQLite Novel Repository
//!
//! [`NovelQueryPort`] 的 SQLite 实现。全部只读；
//! 每个查询都在调用方传入的 [`Snapshot`]（DEFERRED 事务）内执行。

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{NovelQueryPort, RepositoryError, Snapshot};
use crate::domain::novel::{Novel, NovelInfo, RankedNovel, WorkId};

/// SQLite Novel Repository
pub struct SqliteNovelRepository {
    pool: DbPool,
}

impl SqliteNovelRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(FromRow)]
struct NovelRow {
    id: i64,
    title: String,
    author_surname: String,
    author_given_name: String,
    aozora_url: String,
    total_access_count: i64,
}

impl From<NovelRow> for Novel {
    fn from(row: NovelRow) -> Self {
        Novel {
            work_id: WorkId::new(row.id),
            title: row.title,
            author_surname: row.author_surname,
            author_given_name: row.author_given_name,
            aozora_url: row.aozora_url,
            total_access_count: row.total_access_count,
        }
    }
}

#[derive(FromRow)]
struct NovelInfoRow {
    id: i64,
    title: String,
    author_surname: String,
    author_given_name: String,
}

impl From<NovelInfoRow> for NovelInfo {
    fn from(row: NovelInfoRow) -> Self {
        NovelInfo {
            work_id: WorkId::new(row.id),
            title: row.title,
            author_surname: row.author_surname,
            author_given_name: row.author_given_name,
        }
    }
}

#[async_trait]
impl NovelQueryPort for SqliteNovelRepository {
    async fn begin_snapshot(&self) -> Result<Snapshot, RepositoryError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::TransactionError(e.to_string()))?;

        Ok(Snapshot::new(tx))
    }

    async fn find_by_work_id(
        &self,
        snapshot: &mut Snapshot,
        work_id: WorkId,
    ) -> Result<Option<Novel>, RepositoryError> {
        let row: Option<NovelRow> = sqlx::query_as(
            "SELECT id, title, author_surname, author_given_name, aozora_url, total_access_count \
             FROM novels WHERE id = ?",
        )
        .bind(work_id.value())
        .fetch_optional(snapshot.conn())
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Novel::from))
    }

    async fn ranked_by_access_count(
        &self,
        snapshot: &mut Snapshot,
        limit: i64,
    ) -> Result<Vec<RankedNovel>, RepositoryError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        // 并列名次按 id 升序打破，保证同一快照下结果确定
        let rows: Vec<NovelRow> = sqlx::query_as(
            "SELECT id, title, author_surname, author_given_name, aozora_url, total_access_count \
             FROM novels ORDER BY total_access_count DESC, id ASC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(snapshot.conn())
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| RankedNovel {
                rank: i as u32 + 1,
                novel: Novel::from(row),
            })
            .collect())
    }

    async fn search_by_author(
        &self,
        snapshot: &mut Snapshot,
        query: &str,
    ) -> Result<Vec<NovelInfo>, RepositoryError> {
        // 空串不是"匹配全部"
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // instr() 做区分大小写的子串匹配，无需转义 LIKE 通配符
        let rows: Vec<NovelInfoRow> = sqlx::query_as(
            "SELECT id, title, author_surname, author_given_name FROM novels \
             WHERE instr(author_surname, ?) > 0 OR instr(author_given_name, ?) > 0 \
             ORDER BY id ASC",
        )
        .bind(query)
        .bind(query)
        .fetch_all(snapshot.conn())
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(NovelInfo::from).collect())
    }
}

/// 测试用种子数据写入（生产路径绝不写库，写入是外部采集器的职责）
#[cfg(test)]
pub(crate) async fn insert_novel_for_test(
    pool: &DbPool,
    id: i64,
    title: &str,
    author_surname: &str,
    author_given_name: &str,
    aozora_url: &str,
    total_access_count: i64,
) {
    sqlx::query(
        "INSERT INTO novels (id, title, author_surname, author_given_name, aozora_url, total_access_count) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(title)
    .bind(author_surname)
    .bind(author_given_name)
    .bind(aozora_url)
    .bind(total_access_count)
    .execute(pool)
    .await
    .expect("test seed insert failed");
}
