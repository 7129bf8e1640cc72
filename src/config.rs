use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SubhunterError;

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)+$")
        .expect("domain regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Technique {
    Crtsh,
    Dns,
    Bruteforce,
}

/// Immutable run configuration, constructed once at startup and validated
/// before any network activity.
#[derive(Debug, Clone)]
pub struct EnumConfig {
    pub domain: String,
    pub recursive: bool,
    pub include_wildcards: bool,
    pub exclude_wildcards: bool,
    /// Lowercased extension tokens with any leading dot stripped.
    pub extensions: Vec<String>,
    pub rate_limit: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    /// 0 means unbounded, matching the historical behavior.
    pub max_queries: usize,
    pub technique: Technique,
}

impl EnumConfig {
    /// Convert a seconds value from the CLI into a `Duration`.
    ///
    /// clap accepts any f64 here, including `inf`, `NaN`, negatives, and
    /// values past the Duration range; all of those are configuration
    /// errors, not panics.
    pub fn parse_seconds(flag: &str, secs: f64) -> Result<Duration, SubhunterError> {
        Duration::try_from_secs_f64(secs).map_err(|_| {
            SubhunterError::Config(format!(
                "--{flag} must be a finite, non-negative number of seconds, got {secs}"
            ))
        })
    }

    /// Split a comma-separated extension list into canonical tokens.
    pub fn parse_extensions(raw: Option<&str>) -> Vec<String> {
        raw.map(|s| {
            s.split(',')
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect()
        })
        .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), SubhunterError> {
        if self.domain.is_empty() {
            return Err(SubhunterError::Config("domain must not be empty".into()));
        }
        if !DOMAIN_RE.is_match(&self.domain) {
            return Err(SubhunterError::Config(format!(
                "'{}' is not a syntactically valid domain name",
                self.domain
            )));
        }
        if self.timeout.is_zero() {
            return Err(SubhunterError::Config("--timeout must be positive".into()));
        }
        if self.include_wildcards && self.exclude_wildcards {
            return Err(SubhunterError::Config(
                "--wildcard and --exclude-wildcards conflict; pick one".into(),
            ));
        }
        if self.technique != Technique::Crtsh {
            return Err(SubhunterError::Config(format!(
                "technique {:?} is not implemented; only crtsh is supported",
                self.technique
            )));
        }
        Ok(())
    }
}
