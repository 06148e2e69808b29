use std::str::FromStr;

/// Parses `key` from `lookup`, falling back to `default` when unset or malformed.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads a boolean flag. Only `false`/`0`/`no`/`off` (any case) disable it.
pub(crate) fn flag_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        ),
        None => default,
    }
}

pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_parse_or_uses_value_when_valid() {
        let lookup = lookup_from(&[("PORT", " 8080 ")]);
        assert_eq!(parse_or(&lookup, "PORT", 3000u16), 8080);
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        let lookup = lookup_from(&[("PORT", "eighty")]);
        assert_eq!(parse_or(&lookup, "PORT", 3000u16), 3000);
        assert_eq!(parse_or(&lookup, "MISSING", 7u32), 7);
    }

    #[test]
    fn test_flag_or() {
        let lookup = lookup_from(&[("A", "FALSE"), ("B", "0"), ("C", "yes"), ("D", "off")]);
        assert!(!flag_or(&lookup, "A", true));
        assert!(!flag_or(&lookup, "B", true));
        assert!(flag_or(&lookup, "C", false));
        assert!(!flag_or(&lookup, "D", true));
        assert!(flag_or(&lookup, "UNSET", true));
    }
}
