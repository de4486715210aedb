/*
 * Responsibility
 * - api の公開ポイント (routes() の re-export など)
 */
pub mod extractors;
pub mod guard;
pub mod handlers;
mod routes;

pub use routes::routes;
