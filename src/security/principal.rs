/*
 * Responsibility
 * - リクエストに紐づく「認証済み主体」の型 (Principal / Authority)
 * - middleware が生成して request extensions に格納し、
 *   handler / guard はこの型だけを見る
 *
 * Notes
 * - 資格情報の検証ロジックは authenticator 側の責務
 * - ここは「型（契約）」として固定化する
 */

/// ロール識別子。完全一致で比較される opaque な文字列ラベル。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority(String);

impl Authority {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 動作確認用に決め打ちするロール
pub const ROLE_TEST: &str = "ROLE_TEST";

/// 認証済みリクエストに付与される主体
///
/// - `name` / `credential` はこのデモでは常に空文字
/// - `authorities` が route guard の比較対象
/// - リクエスト毎に生成され、リクエスト終了とともに破棄される
#[derive(Debug, Clone)]
pub struct Principal {
    pub name: String,
    pub credential: String,
    pub authorities: Vec<Authority>,
}

impl Principal {
    pub fn new(
        name: impl Into<String>,
        credential: impl Into<String>,
        authorities: Vec<Authority>,
    ) -> Self {
        Self {
            name: name.into(),
            credential: credential.into(),
            authorities,
        }
    }

    pub fn has_authority(&self, required: &Authority) -> bool {
        self.authorities.iter().any(|a| a == required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_authority_is_exact_match() {
        let p = Principal::new("", "", vec![Authority::new(ROLE_TEST)]);

        assert!(p.has_authority(&Authority::new("ROLE_TEST")));
        assert!(!p.has_authority(&Authority::new("ROLE_ADMIN")));
        assert!(!p.has_authority(&Authority::new("role_test")));
    }

    #[test]
    fn empty_authority_set_grants_nothing() {
        let p = Principal::new("", "", Vec::new());
        assert!(!p.has_authority(&Authority::new(ROLE_TEST)));
    }
}
