pub const ALLOW_SELF_FOLLOW_VAR: &str = "AGORA_ALLOW_SELF_FOLLOW";
pub const ALLOW_EMPTY_POSTS_VAR: &str = "AGORA_ALLOW_EMPTY_POSTS";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Policy switches for the checks the graph may or may not enforce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    pub allow_self_follow: bool,
    pub allow_empty_posts: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            allow_self_follow: false,
            allow_empty_posts: true,
        }
    }
}

impl GraphConfig {
    pub fn from_env() -> Self {
        let defaults = GraphConfig::default();
        GraphConfig {
            allow_self_follow: env_flag(ALLOW_SELF_FOLLOW_VAR).unwrap_or(defaults.allow_self_follow),
            allow_empty_posts: env_flag(ALLOW_EMPTY_POSTS_VAR).unwrap_or(defaults.allow_empty_posts),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn defaults_reject_self_follow_and_allow_empty_posts() {
        let config = GraphConfig::default();
        assert!(!config.allow_self_follow);
        assert!(config.allow_empty_posts);
    }
}
