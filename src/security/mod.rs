/*
 * Responsibility
 * - security の公開インターフェース (re-export)
 * - Principal / Authority / Authenticator / PathRules
 */
pub mod authenticator;
pub mod principal;
pub mod rules;

pub use authenticator::{Authenticator, FixedRoleAuthenticator};
pub use principal::{Authority, Principal, ROLE_TEST};
pub use rules::PathRules;
