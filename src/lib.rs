/*
 * Responsibility
 * - crate root: module wiring, public surface for integration tests
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod state;
