/// Application name, used for the binary and the config file.
pub const APP_NAME: &str = "rolodex";

/// Optional TOML config file looked up in the working directory.
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// Prefix for environment overrides, e.g. `ROLODEX__EXPORT__BASE64=false`.
pub const ENV_PREFIX: &str = "ROLODEX";

/// Separator between the prefix and nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";

