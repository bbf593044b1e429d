/// Lookup used for every environment read, so tests can feed a fixed map
/// instead of mutating the process environment.
pub type EnvLookup = dyn Fn(&str) -> Option<String> + Send + Sync;

pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Read a variable and drop it when blank.
pub fn non_empty(env: &EnvLookup, name: &str) -> Option<String> {
    env(name)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env_style_booleans() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn blank_values_are_ignored() {
        let env = |name: &str| match name {
            "BLANK" => Some("   ".to_string()),
            "SET" => Some(" value ".to_string()),
            _ => None,
        };
        assert_eq!(non_empty(&env, "BLANK"), None);
        assert_eq!(non_empty(&env, "SET").as_deref(), Some("value"));
        assert_eq!(non_empty(&env, "MISSING"), None);
    }
}
