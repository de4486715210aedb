/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 */
pub mod auth_context;
pub mod http;
