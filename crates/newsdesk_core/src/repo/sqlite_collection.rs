//! SQLite-backed article collection.
//!
//! # Invariants
//! - Connections must come from `db::open_db*` (migrated, `contains_ci`
//!   registered).
//! - Ids are generated here as random UUIDs; `seq` records insertion order.
//! - Read paths reject undecodable rows instead of masking them.

use crate::db::CONTAINS_CI_FN;
use crate::model::article::{Article, ArticleId};
use crate::repo::article_store::{RepoError, RepoResult};
use crate::repo::collection::{
    ArticleChanges, ArticleCollection, FindOptions, NewArticleDocument, Sort,
};
use crate::search::filter::Filter;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at
FROM articles";

/// Article collection stored in the `articles` table.
pub struct SqliteArticleCollection<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleCollection<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleCollection for SqliteArticleCollection<'_> {
    fn insert_one(&self, document: &NewArticleDocument<'_>) -> RepoResult<ArticleId> {
        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO articles (id, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                id.to_string(),
                document.title,
                document.content,
                document.created_at,
                document.updated_at,
            ],
        )?;
        Ok(id)
    }

    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_article_row(row)?));
        }

        Ok(None)
    }

    fn find_many(&self, filter: &Filter, options: &FindOptions) -> RepoResult<Vec<Article>> {
        let mut sql = format!("{ARTICLE_SELECT_SQL} WHERE ");
        let mut bind_values: Vec<Value> = Vec::new();
        push_filter_sql(filter, &mut sql, &mut bind_values);

        match options.sort {
            Sort::CreatedAtDesc => sql.push_str(" ORDER BY created_at DESC, seq DESC"),
        }

        // SQLite only accepts OFFSET after LIMIT; -1 means unbounded.
        sql.push_str(" LIMIT ? OFFSET ?");
        bind_values.push(Value::Integer(options.limit.map_or(-1, clamp_to_i64)));
        bind_values.push(Value::Integer(clamp_to_i64(options.skip)));

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            articles.push(parse_article_row(row)?);
        }

        Ok(articles)
    }

    fn count(&self, filter: &Filter) -> RepoResult<u64> {
        let mut sql = String::from("SELECT COUNT(*) FROM articles WHERE ");
        let mut bind_values: Vec<Value> = Vec::new();
        push_filter_sql(filter, &mut sql, &mut bind_values);

        let count: i64 =
            self.conn
                .query_row(&sql, params_from_iter(bind_values), |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative article count `{count}`")))
    }

    fn update_one(&self, id: ArticleId, changes: &ArticleChanges<'_>) -> RepoResult<Option<i64>> {
        let stored_updated_at = self
            .conn
            .query_row(
                "UPDATE articles
                 SET
                    title = ?2,
                    content = ?3,
                    updated_at = MAX(?4, created_at)
                 WHERE id = ?1
                 RETURNING updated_at;",
                params![
                    id.to_string(),
                    changes.title,
                    changes.content,
                    changes.updated_at,
                ],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(stored_updated_at)
    }

    fn delete_one(&self, id: ArticleId) -> RepoResult<u64> {
        let changed = self
            .conn
            .execute("DELETE FROM articles WHERE id = ?1;", [id.to_string()])?;
        Ok(changed as u64)
    }
}

fn push_filter_sql(filter: &Filter, sql: &mut String, bind_values: &mut Vec<Value>) {
    match filter {
        Filter::All => sql.push_str("1 = 1"),
        Filter::Contains { field, needle } => {
            sql.push_str(&format!("{CONTAINS_CI_FN}({}, ?)", field.name()));
            bind_values.push(Value::Text(needle.clone()));
        }
        Filter::Or(branches) if branches.is_empty() => sql.push_str("0 = 1"),
        Filter::Or(branches) => {
            sql.push('(');
            for (index, branch) in branches.iter().enumerate() {
                if index > 0 {
                    sql.push_str(" OR ");
                }
                push_filter_sql(branch, sql, bind_values);
            }
            sql.push(')');
        }
    }
}

fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<Article> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid id value `{id_text}` in articles.id"))
    })?;

    Ok(Article {
        id: Some(id),
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
