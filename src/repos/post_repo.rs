/*
 * Responsibility
 * - Postgres implementation of PostStore
 * - posts CRUD + read-only comments lookup
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::error::StoreError;
use crate::repos::store::{CommentRecord, NewPost, PostRecord, PostStore};

#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn find_all(&self) -> Result<Vec<PostRecord>, StoreError> {
        let rows = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, contents
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, StoreError> {
        let row = sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, contents
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert(&self, post: NewPost) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, contents)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.contents)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, post: NewPost) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, contents = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&post.title)
        .bind(&post.contents)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn find_comments(&self, post_id: i64) -> Result<Vec<CommentRecord>, StoreError> {
        let rows = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, post_id, text
            FROM comments
            WHERE post_id = $1
            ORDER BY id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
