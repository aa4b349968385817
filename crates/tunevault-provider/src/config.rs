use std::time::Duration;

/// Browser identity presented on every HTTP request. The upstream
/// catalogs answer non-browser agents with empty or altered payloads.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/73.0.3683.103 Safari/537.36";

const QQ_BASE_URL: &str = "https://c.y.qq.com";
const NETEASE_BASE_URL: &str = "https://music.163.com";
const XIAMI_BASE_URL: &str = "https://api.xiami.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u8 = 3;
const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;

/// Configuration for the provider gateway client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL for the QQ catalog API.
    pub qq_base_url: String,
    /// Base URL for the Netease catalog API.
    pub netease_base_url: String,
    /// Base URL for the Xiami catalog API.
    pub xiami_base_url: String,
    /// User agent string sent with every HTTP request.
    pub user_agent: String,
    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
    /// Maximum number of retries for failed search/resolve requests.
    pub max_retries: u8,
    /// Base delay for exponential backoff between retries.
    pub retry_base_delay: Duration,
    /// Program name (or path) used by the external-process transport.
    pub curl_program: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            qq_base_url: QQ_BASE_URL.to_string(),
            netease_base_url: NETEASE_BASE_URL.to_string(),
            xiami_base_url: XIAMI_BASE_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
            curl_program: "curl".to_string(),
        }
    }
}

impl ProviderConfig {
    #[must_use]
    pub fn with_qq_base_url(mut self, url: impl Into<String>) -> Self {
        self.qq_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_netease_base_url(mut self, url: impl Into<String>) -> Self {
        self.netease_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_xiami_base_url(mut self, url: impl Into<String>) -> Self {
        self.xiami_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u8) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub const fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    #[must_use]
    pub fn with_curl_program(mut self, program: impl Into<String>) -> Self {
        self.curl_program = program.into();
        self
    }
}
