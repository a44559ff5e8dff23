use std::time::Duration;

/// Default per-call timeout, connect through last body byte
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

pub const ENV_URL: &str = "USERSEARCH_URL";
pub const ENV_ACCESS_TOKEN: &str = "USERSEARCH_ACCESS_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "USERSEARCH_TIMEOUT_MS";
pub const ENV_MAX_PAGE_SIZE: &str = "USERSEARCH_MAX_PAGE_SIZE";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Search client configuration, fixed for the lifetime of a [`crate::SearchClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent verbatim in the `AccessToken` header, empty allowed
    pub access_token: String,
    pub timeout: Duration,
    /// Upper bound applied to every request's limit, `None` for no cap
    pub max_page_size: Option<usize>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            max_page_size: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = Some(max_page_size);
        self
    }

    /// Load configuration from environment variables
    ///
    /// `USERSEARCH_URL` is required. `USERSEARCH_ACCESS_TOKEN` defaults to empty,
    /// `USERSEARCH_TIMEOUT_MS` to one second and `USERSEARCH_MAX_PAGE_SIZE` to no cap.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok(), None)
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// A `base_url` given here replaces `USERSEARCH_URL`, which then becomes
    /// optional. The other variables are read either way.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .or_else(|| lookup(ENV_URL))
            .ok_or(ConfigError::MissingVar(ENV_URL))?;
        let mut config =
            Self::new(base_url).with_access_token(lookup(ENV_ACCESS_TOKEN).unwrap_or_default());

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout = Duration::from_millis(parse_var(ENV_TIMEOUT_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX_PAGE_SIZE) {
            config.max_page_size = Some(parse_var(ENV_MAX_PAGE_SIZE, &raw)?);
        }

        Ok(config)
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        access_token: Option<String>,
        timeout_ms: Option<u64>,
        max_page_size: Option<usize>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(token) = access_token {
            self.access_token = token;
        }
        if let Some(ms) = timeout_ms {
            self.timeout = Duration::from_millis(ms);
        }
        if max_page_size.is_some() {
            self.max_page_size = max_page_size;
        }
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
        name,
        value: raw.to_string(),
    })
}
