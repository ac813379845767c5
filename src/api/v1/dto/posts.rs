/*
 * Responsibility
 * - posts request/response DTOs
 * - presence validation for the two required fields
 */
use serde::{Deserialize, Serialize};

use crate::error::messages;
use crate::repos::store::{CommentRecord, NewPost, PostRecord};

/// Request body for create and update (update is a full replace, so the
/// required fields are the same). Fields are optional at the serde level
/// so that a missing or null field reaches `validate()` instead of being
/// rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub title: Option<String>,
    pub contents: Option<String>,
}

impl PostBody {
    /// Missing, null and empty-string values are rejected; any other
    /// string (whitespace included) counts as present.
    pub fn validate(self) -> Result<NewPost, &'static str> {
        let title = self.title.filter(|t| !t.is_empty());
        let contents = self.contents.filter(|c| !c.is_empty());

        match (title, contents) {
            (Some(title), Some(contents)) => Ok(NewPost { title, contents }),
            _ => Err(messages::POST_FIELDS_REQUIRED),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

impl From<PostRecord> for PostResponse {
    fn from(row: PostRecord) -> Self {
        Self {
            id: row.id,
            title: row.title,
            contents: row.contents,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
}

impl From<CommentRecord> for CommentResponse {
    fn from(row: CommentRecord) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            text: row.text,
        }
    }
}
