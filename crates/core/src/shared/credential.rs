use super::constants::TOKEN_ENV_VARS;

/// Resolve the HuggingFace bearer token authorizing gated model downloads.
///
/// Priority: explicit argument, then the named environment variables in
/// order. The environment lookup is injected so tests never mutate the
/// process environment. Empty values are treated as absent. The token is
/// opaque and must never be logged.
pub fn resolve_credential<F>(explicit: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = explicit {
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    TOKEN_ENV_VARS
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn lookup(map: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_explicit_token_wins_over_environment() {
        let map = env(&[("HUGGINGFACE_TOKEN", "from-env")]);
        let token = resolve_credential(Some("from-arg"), lookup(&map));
        assert_eq!(token.as_deref(), Some("from-arg"));
    }

    #[test]
    fn test_primary_env_var_used_before_secondary() {
        let map = env(&[("HUGGINGFACE_TOKEN", "primary"), ("HF_TOKEN", "secondary")]);
        let token = resolve_credential(None, lookup(&map));
        assert_eq!(token.as_deref(), Some("primary"));
    }

    #[test]
    fn test_secondary_env_var_used_when_primary_missing() {
        let map = env(&[("HF_TOKEN", "secondary")]);
        let token = resolve_credential(None, lookup(&map));
        assert_eq!(token.as_deref(), Some("secondary"));
    }

    #[test]
    fn test_no_source_yields_none() {
        assert_eq!(resolve_credential(None, |_| None), None);
    }

    #[test]
    fn test_empty_values_are_treated_as_absent() {
        let map = env(&[("HUGGINGFACE_TOKEN", ""), ("HF_TOKEN", "fallback")]);
        let token = resolve_credential(Some(""), lookup(&map));
        assert_eq!(token.as_deref(), Some("fallback"));
    }
}
