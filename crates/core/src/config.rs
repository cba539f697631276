//! Configuration management
//!
//! Backend settings come from two places: the process environment (including
//! anything `.env` loaded into it) and an optional TOML file at
//! ~/.config/s3drop/config.toml. Environment values win over file values.
//! Both collapse into one immutable [`BackendConfig`] per run.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Default output format
const DEFAULT_OUTPUT: &str = "human";

/// Default number of entries returned by a listing
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Storage provider flavour
///
/// Both providers speak the same S3 protocol. The provider only decides which
/// environment variables are read and which defaults apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Generic S3 (AWS virtual-hosted URLs unless an endpoint is set)
    #[default]
    S3,
    /// DigitalOcean Spaces, optionally fronted by a CDN
    Spaces,
}

/// Environment variable names for one provider
struct EnvNames {
    access_key: &'static str,
    secret_key: &'static str,
    bucket: &'static str,
    region: &'static str,
    endpoint: &'static str,
    public_url: &'static str,
    prefix: &'static str,
    force_path_style: Option<&'static str>,
}

const S3_ENV: EnvNames = EnvNames {
    access_key: "AWS_ACCESS_KEY_ID",
    secret_key: "AWS_SECRET_ACCESS_KEY",
    bucket: "S3_BUCKET_NAME",
    region: "AWS_REGION",
    endpoint: "S3_ENDPOINT",
    public_url: "S3_PUBLIC_URL",
    prefix: "S3_PREFIX",
    force_path_style: Some("S3_FORCE_PATH_STYLE"),
};

const SPACES_ENV: EnvNames = EnvNames {
    access_key: "DO_SPACES_KEY",
    secret_key: "DO_SPACES_SECRET",
    bucket: "DO_SPACES_BUCKET",
    region: "DO_SPACES_REGION",
    endpoint: "DO_SPACES_ENDPOINT",
    public_url: "DO_SPACES_FILES_URL",
    prefix: "DO_SPACES_PREFIX",
    force_path_style: None,
};

impl Provider {
    /// Region used when none is configured
    pub const fn default_region(self) -> &'static str {
        match self {
            Provider::S3 => "us-east-1",
            Provider::Spaces => "nyc3",
        }
    }

    /// Whether uploads are public-read unless the caller says otherwise
    pub const fn default_public(self) -> bool {
        matches!(self, Provider::Spaces)
    }

    /// Human-readable provider name
    pub const fn display_name(self) -> &'static str {
        match self {
            Provider::S3 => "Amazon S3",
            Provider::Spaces => "DigitalOcean Spaces",
        }
    }

    const fn env_names(self) -> &'static EnvNames {
        match self {
            Provider::S3 => &S3_ENV,
            Provider::Spaces => &SPACES_ENV,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Partially specified backend settings, as found in one configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// CDN or custom public base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_path_style: Option<bool>,
}

impl BackendSettings {
    /// Read settings for `provider` through a variable lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(provider: Provider, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let names = provider.env_names();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            access_key: get(names.access_key),
            secret_key: get(names.secret_key),
            bucket: get(names.bucket),
            region: get(names.region),
            endpoint: get(names.endpoint),
            public_url: get(names.public_url),
            prefix: get(names.prefix),
            force_path_style: names
                .force_path_style
                .and_then(get)
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")),
        }
    }

    /// Read settings for `provider` from the process environment
    pub fn from_env(provider: Provider) -> Self {
        Self::from_lookup(provider, |name| std::env::var(name).ok())
    }

    /// Fill unset fields from `fallback`
    pub fn or(self, fallback: BackendSettings) -> Self {
        Self {
            access_key: self.access_key.or(fallback.access_key),
            secret_key: self.secret_key.or(fallback.secret_key),
            bucket: self.bucket.or(fallback.bucket),
            region: self.region.or(fallback.region),
            endpoint: self.endpoint.or(fallback.endpoint),
            public_url: self.public_url.or(fallback.public_url),
            prefix: self.prefix.or(fallback.prefix),
            force_path_style: self.force_path_style.or(fallback.force_path_style),
        }
    }
}

/// Fully resolved connection settings for one bucket
///
/// Credentials and bucket are guaranteed non-empty. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    provider: Provider,
    access_key: String,
    secret_key: String,
    endpoint: Option<Url>,
    region: String,
    bucket: String,
    public_url: Option<String>,
    prefix: String,
    force_path_style: bool,
}

impl BackendConfig {
    /// Create a config with required fields and provider defaults for the rest
    pub fn new(
        provider: Provider,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();
        let bucket = bucket.into();

        let mut missing = Vec::new();
        if access_key.trim().is_empty() {
            missing.push("access key");
        }
        if secret_key.trim().is_empty() {
            missing.push("secret key");
        }
        if bucket.trim().is_empty() {
            missing.push("bucket");
        }
        if !missing.is_empty() {
            return Err(Error::Config(format!("missing {}", missing.join(", "))));
        }

        Ok(Self {
            provider,
            access_key,
            secret_key,
            endpoint: None,
            region: provider.default_region().to_string(),
            bucket,
            public_url: None,
            prefix: String::new(),
            force_path_style: false,
        })
    }

    /// Set the service endpoint
    ///
    /// A bare host such as `nyc3.digitaloceanspaces.com` is treated as https.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let endpoint = endpoint.trim();
        let url = if endpoint.contains("://") {
            Url::parse(endpoint)?
        } else {
            Url::parse(&format!("https://{endpoint}"))?
        };
        if url.host_str().is_none() {
            return Err(Error::Config(format!("endpoint has no host: {endpoint}")));
        }
        self.endpoint = Some(url);
        Ok(self)
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the public base URL used instead of the bucket URL (CDN)
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = Some(public_url.into());
        self
    }

    /// Set the default key prefix for uploads and listings
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Build from merged settings, reporting every missing variable at once
    pub fn from_settings(provider: Provider, settings: BackendSettings) -> Result<Self> {
        let names = provider.env_names();

        let mut missing = Vec::new();
        if settings.access_key.is_none() {
            missing.push(names.access_key);
        }
        if settings.secret_key.is_none() {
            missing.push(names.secret_key);
        }
        if provider == Provider::Spaces && settings.endpoint.is_none() {
            missing.push(names.endpoint);
        }
        if settings.bucket.is_none() {
            missing.push(names.bucket);
        }
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "missing required settings for {provider}: {}",
                missing.join(", ")
            )));
        }

        let mut config = Self::new(
            provider,
            settings.access_key.unwrap_or_default(),
            settings.secret_key.unwrap_or_default(),
            settings.bucket.unwrap_or_default(),
        )?;

        if let Some(endpoint) = settings.endpoint {
            config = config.with_endpoint(&endpoint)?;
        }
        if let Some(region) = settings.region {
            config = config.with_region(region);
        }
        if let Some(public_url) = settings.public_url {
            config = config.with_public_url(public_url);
        }
        if let Some(prefix) = settings.prefix {
            config = config.with_prefix(prefix);
        }
        if let Some(force) = settings.force_path_style {
            config = config.with_force_path_style(force);
        }

        Ok(config)
    }

    /// Resolve the backend for `provider`: environment first, then the config file
    pub fn resolve<F>(provider: Provider, file: &Config, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings =
            BackendSettings::from_lookup(provider, lookup).or(file.settings(provider).clone());
        Self::from_settings(provider, settings)
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn force_path_style(&self) -> bool {
        self.force_path_style
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("provider", &self.provider)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_ref().map(Url::as_str))
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("public_url", &self.public_url)
            .field("prefix", &self.prefix)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

/// Main configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Generic S3 backend settings
    #[serde(default)]
    pub s3: BackendSettings,

    /// Spaces backend settings
    #[serde(default)]
    pub spaces: BackendSettings,
}

impl Config {
    /// File settings for a provider
    pub fn settings(&self, provider: Provider) -> &BackendSettings {
        match provider {
            Provider::S3 => &self.s3,
            Provider::Spaces => &self.spaces,
        }
    }
}

/// Default settings for CLI behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Provider used when none is given on the command line
    #[serde(default)]
    pub provider: Provider,

    /// Output format: "human" or "json"
    #[serde(default = "default_output")]
    pub output: String,

    /// Listing page size
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            output: default_output(),
            max_results: default_max_results(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
            s3: BackendSettings::default(),
            spaces: BackendSettings::default(),
        }
    }
}

/// Configuration manager handles locating and loading the config file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        let config_path = config_dir.join("s3drop").join("config.toml");
        Ok(Self { config_path })
    }

    /// Create a ConfigManager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// A missing file yields the default configuration.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&content)?;

        if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade s3drop.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        tracing::debug!(path = %self.config_path.display(), "loaded configuration file");
        Ok(config)
    }
}
