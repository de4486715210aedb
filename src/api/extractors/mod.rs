/*!
 * Principal extractor
 *
 * Responsibility:
 * - interceptor が extensions に入れた Principal を handler に提供する
 *
 * Public API:
 * - CurrentPrincipal
 */

mod principal;

pub use principal::CurrentPrincipal;
