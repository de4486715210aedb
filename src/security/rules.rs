//! interceptor の適用/除外パスパターン (include/exclude のルール表)
//!
//! - 起動時に構築され、以後 read-only
//! - パターンはこのデモに必要な最小サブセットのみ:
//!   `/**` (全て) / `<prefix>/**` (prefix 以下) / それ以外は完全一致
//! - include に 1 つ以上マッチし、exclude にマッチしなければ適用

#[derive(Debug, Clone)]
enum Pattern {
    /// "/**"
    Any,
    /// "<prefix>/**" — prefix 自身と、その配下すべて
    Prefix(String),
    /// 完全一致
    Exact(String),
}

impl Pattern {
    fn parse(pattern: &str) -> Self {
        if pattern == "/**" {
            Pattern::Any
        } else if let Some(prefix) = pattern.strip_suffix("/**") {
            Pattern::Prefix(prefix.to_string())
        } else {
            Pattern::Exact(pattern.to_string())
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Prefix(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            Pattern::Exact(exact) => path == exact,
        }
    }
}

/// interceptor を適用するパスのルール表
#[derive(Debug, Clone)]
pub struct PathRules {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl PathRules {
    pub fn new() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// 適用対象のパス(パターン)を追加する
    pub fn add_path_pattern(mut self, pattern: &str) -> Self {
        self.include.push(Pattern::parse(pattern));
        self
    }

    /// 除外するパス(パターン)を追加する
    pub fn exclude_path_pattern(mut self, pattern: &str) -> Self {
        self.exclude.push(Pattern::parse(pattern));
        self
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.include.iter().any(|p| p.matches(path)) && !self.exclude.iter().any(|p| p.matches(path))
    }
}

impl Default for PathRules {
    /// デモの固定ルール: 全パスに適用、/static/** は除外
    fn default() -> Self {
        Self::new()
            .add_path_pattern("/**")
            .exclude_path_pattern("/static/**")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_cover_everything_but_static() {
        let rules = PathRules::default();

        assert!(rules.applies_to("/hello"));
        assert!(rules.applies_to("/"));
        assert!(rules.applies_to("/a/b/c"));

        assert!(!rules.applies_to("/static"));
        assert!(!rules.applies_to("/static/foo"));
        assert!(!rules.applies_to("/static/a/b"));
    }

    #[test]
    fn prefix_exclusion_does_not_match_sibling_paths() {
        let rules = PathRules::default();

        // "/staticx" は "/static/**" の配下ではない
        assert!(rules.applies_to("/staticx"));
        assert!(rules.applies_to("/staticfoo/bar"));
    }

    #[test]
    fn empty_include_list_applies_to_nothing() {
        let rules = PathRules::new().exclude_path_pattern("/static/**");

        assert!(!rules.applies_to("/hello"));
    }

    #[test]
    fn exact_pattern_requires_full_match() {
        let rules = PathRules::new().add_path_pattern("/hello");

        assert!(rules.applies_to("/hello"));
        assert!(!rules.applies_to("/hello/world"));
        assert!(!rules.applies_to("/hell"));
    }
}
