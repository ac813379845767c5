/*
 * Responsibility
 * - /posts CRUD handlers + nested read-only /posts/{id}/comments
 * - map store results onto the fixed status/message table:
 *   absence -> 404, bad input -> 400, store failure -> operation 500
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::dto::posts::{CommentResponse, PostBody, PostResponse},
    error::{ApiError, messages},
    repos::store::PostRecord,
    state::AppState,
};

/// The path id is opaque on the wire. An id that does not parse can
/// address no record, so it takes the not-found branch.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(messages::POST_NOT_FOUND))
}

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let rows = state.store.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "find_all failed");
        ApiError::internal(messages::POSTS_FETCH_FAILED)
    })?;

    Ok(Json(rows.into_iter().map(PostResponse::from).collect()))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = parse_id(&id)?;

    let row = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, post_id = id, "find_by_id failed");
            ApiError::internal(messages::POST_FETCH_FAILED)
        })?
        .ok_or(ApiError::not_found(messages::POST_NOT_FOUND))?;

    Ok(Json(row.into()))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<PostBody>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    // Store is never called for an invalid body.
    let new_post = body.validate().map_err(ApiError::validation)?;

    let id = state.store.insert(new_post.clone()).await.map_err(|e| {
        tracing::error!(error = %e, "insert failed");
        ApiError::internal(messages::POST_SAVE_FAILED)
    })?;

    // Echo the validated fields with the assigned id rather than
    // re-reading the record.
    let res = PostResponse {
        id,
        title: new_post.title,
        contents: new_post.contents,
    };
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PostBody>,
) -> Result<Json<PostResponse>, ApiError> {
    // Body validation comes first, as on create.
    let new_post = body.validate().map_err(ApiError::validation)?;
    let id = parse_id(&id)?;

    let affected = state
        .store
        .update(id, new_post.clone())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, post_id = id, "update failed");
            ApiError::internal(messages::POST_MODIFY_FAILED)
        })?;

    if affected == 0 {
        return Err(ApiError::not_found(messages::POST_NOT_FOUND));
    }

    // The replacement record is returned as constructed, not re-read.
    let res = PostResponse {
        id,
        title: new_post.title,
        contents: new_post.contents,
    };
    Ok(Json(res))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = parse_id(&id)?;

    // Fetch first so the deleted record can be returned. Absence is a
    // successful empty result here, so a missing post is always the 404
    // branch; only store failures fall through to the removal 500.
    let row: PostRecord = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, post_id = id, "find_by_id before remove failed");
            ApiError::internal(messages::POST_REMOVE_FAILED)
        })?
        .ok_or(ApiError::not_found(messages::POST_NOT_FOUND))?;

    let affected = state.store.remove(id).await.map_err(|e| {
        tracing::error!(error = %e, post_id = id, "remove failed");
        ApiError::internal(messages::POST_REMOVE_FAILED)
    })?;

    // Lost the race between fetch and remove.
    if affected == 0 {
        return Err(ApiError::internal(messages::POST_REMOVE_FAILED));
    }

    Ok(Json(row.into()))
}

pub async fn list_post_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let id = parse_id(&id)?;

    // Existence check first; a missing post reuses the post 404 message.
    let exists = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, post_id = id, "find_by_id before comments failed");
            ApiError::internal(messages::COMMENTS_FETCH_FAILED)
        })?
        .is_some();

    if !exists {
        return Err(ApiError::not_found(messages::POST_NOT_FOUND));
    }

    let rows = state.store.find_comments(id).await.map_err(|e| {
        tracing::error!(error = %e, post_id = id, "find_comments failed");
        ApiError::internal(messages::COMMENTS_FETCH_FAILED)
    })?;

    Ok(Json(rows.into_iter().map(CommentResponse::from).collect()))
}
