/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 * - holds the data-access collaborator handle, read-only after startup
 * - Clone is cheap (Arc inside)
 */
use std::sync::Arc;

use crate::repos::store::PostStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}
