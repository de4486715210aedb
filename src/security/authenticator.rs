/*
 * Responsibility
 * - 「リクエストから Principal を解決する」能力の抽象 (Authenticator)
 * - 固定ロールを返すデモ実装 (FixedRoleAuthenticator)
 *
 * Notes
 * - 本来は DB やトークン検証で権限を確認して Principal を作るが、
 *   動作確認のため決め打ちの実装を使う
 * - 差し替え可能にしておくことで、後から本物の credential 解決に置き換えられる
 */
use async_trait::async_trait;
use axum::{body::Body, http::Request};

use super::principal::{Authority, Principal, ROLE_TEST};

/// リクエストから認証済み主体を解決する
///
/// `AppState` に `Arc<dyn Authenticator>` として保持される。
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn resolve(&self, req: &Request<Body>) -> Principal;
}

/// リクエスト内容を一切見ず、固定の authority を 1 つだけ付与する実装。
/// identity / credential は空文字のまま。
pub struct FixedRoleAuthenticator {
    authority: Authority,
}

impl FixedRoleAuthenticator {
    pub fn new(authority: Authority) -> Self {
        Self { authority }
    }
}

impl Default for FixedRoleAuthenticator {
    fn default() -> Self {
        Self::new(Authority::new(ROLE_TEST))
    }
}

#[async_trait]
impl Authenticator for FixedRoleAuthenticator {
    async fn resolve(&self, _req: &Request<Body>) -> Principal {
        Principal::new("", "", vec![self.authority.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_role_ignores_the_request() {
        let authenticator = FixedRoleAuthenticator::default();

        let req = Request::get("/anything")
            .header("authorization", "Bearer garbage")
            .body(Body::empty())
            .unwrap();
        let principal = authenticator.resolve(&req).await;

        assert_eq!(principal.name, "");
        assert_eq!(principal.credential, "");
        assert_eq!(principal.authorities, vec![Authority::new(ROLE_TEST)]);
    }
}
