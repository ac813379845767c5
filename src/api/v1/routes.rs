/*
 * Responsibility
 * - v1 URL structure
 * - the route table is built once at startup and immutable afterwards
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    posts::{create_post, delete_post, get_post, list_post_comments, list_posts, update_post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/{id}/comments", get(list_post_comments))
}
