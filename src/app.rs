/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (認証コンテキスト / HTTP共通)
 * - axum::serve() で起動
 */
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::{
    api,
    config::Config,
    middleware,
    security::{FixedRoleAuthenticator, PathRules},
    state::AppState,
};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let default_filter = if config.app_env.is_production() {
        "info"
    } else {
        "debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // 動作確認用: 全リクエストに固定ロールを付与する authenticator を使う
    let state = AppState::new(
        Arc::new(FixedRoleAuthenticator::default()),
        PathRules::default(),
    );

    let app = build_router(state);

    tracing::info!(addr = %config.addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let router = api::routes().with_state(state.clone());

    // 認証コンテキストは routing の外側 (handler より先に実行される)
    let router = middleware::auth_context::apply(router, state);
    middleware::http::apply(router)
}
