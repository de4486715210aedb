//! リクエスト毎に Principal を解決して extensions に入れる interceptor
//!
//! - PathRules にマッチしないパス (例: /static/**) では何もしない
//! - マッチするパスでは、既存のコンテキストがあっても無条件に上書きする
//! - 失敗する経路は無く、常に次の stage へ進む

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::state::AppState;

/// Router 全体に認証コンテキストの interceptor を適用する。
///
/// 例：
/// ```ignore
/// let app = api::routes().with_state(state.clone());
/// let app = middleware::auth_context::apply(app, state);
/// ```
pub fn apply(router: Router, state: AppState) -> Router {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, auth_context_middleware))
}

async fn auth_context_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if state.rules.applies_to(req.uri().path()) {
        let principal = state.authenticator.resolve(&req).await;

        // middleware → extractor/guard への受け渡し。型をキーに上書き insert される
        req.extensions_mut().insert(principal);
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Router, body::Body, http::Request, middleware::Next};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::security::{Authority, FixedRoleAuthenticator, PathRules, Principal};
    use crate::state::AppState;

    /// extensions に入った Principal の authority を返す probe handler
    async fn probe(req: Request<Body>) -> String {
        match req.extensions().get::<Principal>() {
            Some(p) => p
                .authorities
                .iter()
                .map(|a| a.as_str().to_string())
                .collect::<Vec<_>>()
                .join(","),
            None => "none".to_string(),
        }
    }

    fn probe_router() -> Router {
        let state = AppState::new(
            Arc::new(FixedRoleAuthenticator::default()),
            PathRules::default(),
        );
        let router = Router::new()
            .route("/probe", get(probe))
            .route("/static/probe", get(probe));
        super::apply(router, state)
    }

    async fn body_of(router: Router, path: &str) -> String {
        let res = router
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn installs_fixed_role_on_included_paths() {
        assert_eq!(body_of(probe_router(), "/probe").await, "ROLE_TEST");
    }

    #[tokio::test]
    async fn skips_excluded_paths_entirely() {
        assert_eq!(body_of(probe_router(), "/static/probe").await, "none");
    }

    #[tokio::test]
    async fn overwrites_any_preexisting_principal() {
        // interceptor より先に実行される層で別の Principal を仕込んでおく
        async fn plant_bogus(
            mut req: Request<Body>,
            next: Next,
        ) -> axum::response::Response {
            req.extensions_mut().insert(Principal::new(
                "intruder",
                "secret",
                vec![Authority::new("ROLE_ADMIN")],
            ));
            next.run(req).await
        }

        let router = probe_router().layer(axum::middleware::from_fn(plant_bogus));

        assert_eq!(body_of(router, "/probe").await, "ROLE_TEST");
    }
}
