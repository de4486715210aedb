/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - authenticator: リクエストから Principal を解決する実装
 *   - rules: interceptor の適用/除外パスパターン
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::security::{Authenticator, PathRules};

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
    pub rules: PathRules,
}

impl AppState {
    pub fn new(authenticator: Arc<dyn Authenticator>, rules: PathRules) -> Self {
        Self {
            authenticator,
            rules,
        }
    }
}
