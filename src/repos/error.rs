/**
 * Responsibility
 * - the meaning a store conveys upward when it fails
 * - absence of a record is NOT an error (Ok(None) / affected count 0)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("db error")]
    Db(#[from] sqlx::Error),

    /// Non-sqlx backends (e.g. an in-memory store in tests).
    #[error("store backend failure: {0}")]
    Backend(String),
}
