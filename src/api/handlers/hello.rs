/*
 * Responsibility
 * - GET /hello (ROLE_TEST 必須)
 * - guard を通過した場合のみ実行され、固定文字列を返す
 */
use crate::api::extractors::CurrentPrincipal;

pub async fn hello(CurrentPrincipal(principal): CurrentPrincipal) -> &'static str {
    tracing::debug!(authorities = ?principal.authorities, "serving /hello");
    "hello"
}
