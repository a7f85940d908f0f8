//! Backend API configuration resolved at build time.
//!
//! The browser has no process environment, so values are baked in through
//! `option_env!` when the WASM bundle is compiled. Parsing lives in
//! [`ApiConfig::from_values`] so it can be exercised natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_USERS_API_URL: &str = "http://localhost:8000/users/";
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown BUDGET_CSRF_POLICY: {0}")]
    CsrfPolicy(String),
    #[error("invalid boolean for {var}: {value}")]
    Bool { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got '{value}'")]
    Url { var: &'static str, value: String },
}

/// What a failed CSRF bootstrap request means for the call that needed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsrfPolicy {
    /// Log the failure and send the mutating request anyway.
    #[default]
    BestEffort,
    /// Abort the mutating request with an error.
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for the account endpoints (`api/login/`, `api/user/`, ...).
    pub users_url: String,
    /// Prefix for the budget resources (`api/transactions/`, `api/categories/`).
    pub api_root: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub session_key: String,
    pub csrf_policy: CsrfPolicy,
    /// Refresh the CSRF cookie before logout, as login and register do.
    /// Off by default: logout reuses whatever cookie is already set.
    pub csrf_before_logout: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_API_URL.to_owned(),
            api_root: DEFAULT_API_ROOT.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            csrf_policy: CsrfPolicy::BestEffort,
            csrf_before_logout: false,
        }
    }
}

/// Raw, unparsed configuration inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValues<'a> {
    pub users_url: Option<&'a str>,
    pub api_root: Option<&'a str>,
    pub csrf_policy: Option<&'a str>,
    pub csrf_before_logout: Option<&'a str>,
}

impl ApiConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `BUDGET_USERS_API_URL`: default `http://localhost:8000/users/`
    /// - `BUDGET_API_ROOT`: default `http://localhost:8000/`
    /// - `BUDGET_CSRF_POLICY`: `best_effort` (default) or `required`
    /// - `BUDGET_CSRF_BEFORE_LOGOUT`: `true` or `false` (default)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(ConfigValues {
            users_url: option_env!("BUDGET_USERS_API_URL"),
            api_root: option_env!("BUDGET_API_ROOT"),
            csrf_policy: option_env!("BUDGET_CSRF_POLICY"),
            csrf_before_logout: option_env!("BUDGET_CSRF_BEFORE_LOGOUT"),
        })
    }

    /// Parse config from raw values; `None` and blank values take defaults.
    pub fn from_values(values: ConfigValues<'_>) -> Result<Self, ConfigError> {
        let users_url = parse_base_url("BUDGET_USERS_API_URL", values.users_url, DEFAULT_USERS_API_URL)?;
        let api_root = parse_base_url("BUDGET_API_ROOT", values.api_root, DEFAULT_API_ROOT)?;
        let csrf_policy = parse_csrf_policy(values.csrf_policy)?;
        let csrf_before_logout = parse_bool("BUDGET_CSRF_BEFORE_LOGOUT", values.csrf_before_logout, false)?;

        Ok(Self { users_url, api_root, csrf_policy, csrf_before_logout, ..Self::default() })
    }

    pub fn users_endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.users_url)
    }

    pub fn resource_endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(var: &'static str, raw: Option<&str>, default: &str) -> Result<String, ConfigError> {
    let value = non_blank(raw).unwrap_or(default);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Url { var, value: value.to_owned() });
    }
    // Endpoint paths are appended directly, so the prefix must end in a slash.
    if value.ends_with('/') { Ok(value.to_owned()) } else { Ok(format!("{value}/")) }
}

fn parse_csrf_policy(raw: Option<&str>) -> Result<CsrfPolicy, ConfigError> {
    match non_blank(raw).unwrap_or("best_effort") {
        "best_effort" => Ok(CsrfPolicy::BestEffort),
        "required" => Ok(CsrfPolicy::Required),
        other => Err(ConfigError::CsrfPolicy(other.to_owned())),
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    match non_blank(raw) {
        None => Ok(default),
        Some("true" | "1") => Ok(true),
        Some("false" | "0") => Ok(false),
        Some(other) => Err(ConfigError::Bool { var, value: other.to_owned() }),
    }
}
