/*
 * Responsibility
 * - route 単位の宣言的ロールチェック (require_authority)
 * - handler 本体が実行される前に、現在の Principal の authority を検査する
 *
 * Notes
 * - Principal が無い → 401 / authority が足りない → 403
 * - このデモでは interceptor が常に ROLE_TEST を付与するため、
 *   /hello で拒否側の分岐に入ることは無い (意図的な挙動)
 */
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::error::AppError;
use crate::security::{Authority, Principal};

/// MethodRouter にロール必須の guard を掛ける。
///
/// 例：
/// ```ignore
/// .route("/hello", guard::require_authority(get(hello), Authority::new(ROLE_TEST)))
/// ```
pub fn require_authority<S>(routes: MethodRouter<S>, required: Authority) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes.route_layer(middleware::from_fn(move |req: Request, next: Next| {
        let required = required.clone();
        async move { check_authority(required, req, next).await }
    }))
}

async fn check_authority(
    required: Authority,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal = req
        .extensions()
        .get::<Principal>()
        .ok_or(AppError::Unauthorized)?;

    if !principal.has_authority(&required) {
        tracing::warn!(required = required.as_str(), "authority check failed");
        return Err(AppError::Forbidden);
    }

    Ok(next.run(req).await)
}
