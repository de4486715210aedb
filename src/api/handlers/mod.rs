/*
 * Responsibility
 * - handler の公開インターフェース
 */
pub mod health;
pub mod hello;
