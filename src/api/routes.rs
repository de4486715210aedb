/*
 * Responsibility
 * - URL 構造を定義
 * - /hello, /health
 * - ロール必須の範囲を guard::require_authority で宣言する
 */
use axum::{Router, routing::get};

use crate::security::{Authority, ROLE_TEST};
use crate::state::AppState;

use crate::api::{
    guard,
    handlers::{health::health, hello::hello},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/hello",
            guard::require_authority(get(hello), Authority::new(ROLE_TEST)),
        )
}
