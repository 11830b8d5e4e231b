//! Environment variable parsing with warn-level logging for invalid values.

/// Server listen port.
pub const ENV_PORT: &str = "LOGBOOK_PORT";
/// Server bind interface.
pub const ENV_HOST: &str = "LOGBOOK_HOST";
/// PostgreSQL connection string for the server.
pub const ENV_DATABASE_URL: &str = "LOGBOOK_DATABASE_URL";
/// Conventional fallback for [`ENV_DATABASE_URL`].
pub const ENV_DATABASE_URL_FALLBACK: &str = "DATABASE_URL";
/// REST API base URL for client commands.
pub const ENV_API_URL: &str = "LOGBOOK_API_URL";
/// Page size for client listings.
pub const ENV_PAGE_SIZE: &str = "LOGBOOK_PAGE_SIZE";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// First non-empty value among `vars`, checked in order.
#[must_use]
pub fn env_first_non_empty(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|v| v.trim().to_owned())
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a unique variable name, so concurrent tests never touch
    // the same key.
    fn set(var: &str, value: &str) {
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "LOGBOOK_TEST_ENV_PARSE_VALID_51021";
        set(var_name, "42");
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_trims_whitespace() {
        let var_name = "LOGBOOK_TEST_ENV_PARSE_TRIM_51022";
        set(var_name, " 25 ");
        let result: usize = env_parse_with_default(var_name, 10);
        assert_eq!(result, 25);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "LOGBOOK_TEST_ENV_PARSE_INVALID_51023";
        set(var_name, "banana");
        let result: u16 = env_parse_with_default(var_name, 4000);
        assert_eq!(result, 4000);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "LOGBOOK_TEST_ENV_PARSE_MISSING_51024";
        unset(var_name);
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_first_non_empty_skips_blank() {
        let first = "LOGBOOK_TEST_ENV_FIRST_A_51025";
        let second = "LOGBOOK_TEST_ENV_FIRST_B_51026";
        set(first, "   ");
        set(second, "postgres://localhost/logs");
        assert_eq!(
            env_first_non_empty(&[first, second]).as_deref(),
            Some("postgres://localhost/logs")
        );
        unset(first);
        unset(second);
    }

    #[test]
    fn test_env_first_non_empty_none_set() {
        let var_name = "LOGBOOK_TEST_ENV_FIRST_NONE_51027";
        unset(var_name);
        assert_eq!(env_first_non_empty(&[var_name]), None);
    }
}
