#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for a sweep run.
///
/// All timing knobs (inter-page delay, inter-item delay, retry backoff) are
/// configuration rather than constants so the external API's rate ceiling can
/// be tuned without a code change.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Bearer token for the print-on-demand API. Required.
    pub api_token: String,
    /// Base URL of the print-on-demand API, overridable for staging or tests.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Items requested per catalog page.
    pub page_size: u32,
    /// Sleep between consecutive page requests.
    pub inter_page_delay_ms: u64,
    /// Sleep between consecutive per-item operations.
    pub inter_item_delay_ms: u64,
    /// Hard ceiling on pages fetched in one run; trips on a remote that
    /// misreports `last_page`.
    pub max_pages: usize,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// When `true`, a mid-pagination fetch failure degrades to a warned
    /// partial collection instead of failing the whole fetch.
    pub lenient_fetch: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("api_token", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("page_size", &self.page_size)
            .field("inter_page_delay_ms", &self.inter_page_delay_ms)
            .field("inter_item_delay_ms", &self.inter_item_delay_ms)
            .field("max_pages", &self.max_pages)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("lenient_fetch", &self.lenient_fetch)
            .finish()
    }
}
