/*
 * Responsibility
 * - the data-access contract the handlers are written against
 * - production impl: post_repo::PgPostStore; tests substitute their own
 */
use async_trait::async_trait;

use crate::repos::error::StoreError;

/// A stored post. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

/// Field set accepted for insert and for full replace.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

/// A comment attached to one post. Read-only from this service.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
}

/// Persistence collaborator for posts and their comments.
///
/// Semantics the handlers rely on:
/// - A missing record is a successful empty result (`Ok(None)`, affected
///   count 0), never an `Err`.
/// - `insert` returns the id the store assigned.
/// - `update` and `remove` return how many records were affected, which is
///   what distinguishes "not found" from "modified".
///
/// Implementations must be shareable across request handlers
/// (`Arc<dyn PostStore>` in `AppState`).
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PostRecord>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, StoreError>;

    async fn insert(&self, post: NewPost) -> Result<i64, StoreError>;

    async fn update(&self, id: i64, post: NewPost) -> Result<u64, StoreError>;

    async fn remove(&self, id: i64) -> Result<u64, StoreError>;

    async fn find_comments(&self, post_id: i64) -> Result<Vec<CommentRecord>, StoreError>;
}
