use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;

use crate::config::EnumConfig;
use crate::discover::SubdomainSource;
use crate::error::SubhunterError;

#[derive(Debug, Deserialize)]
struct CrtShEntry {
    // crt.sh sometimes omits fields on odd records; treat those as absent
    // rather than failing the whole payload.
    #[serde(default)]
    name_value: Option<String>,
}

/// Certificate-transparency lookup against crt.sh.
///
/// Requests are strictly serialized: the configured rate-limit delay is
/// awaited before every request, and no request is issued while another is
/// in flight.
pub struct CrtShSource {
    client: Client,
    rate_limit: Duration,
}

impl CrtShSource {
    pub fn new(cfg: &EnumConfig) -> Result<Self, SubhunterError> {
        let client = ClientBuilder::new()
            .timeout(cfg.timeout)
            .connect_timeout(cfg.timeout.min(Duration::from_secs(10)))
            .gzip(true)
            .use_rustls_tls()
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|e| SubhunterError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, rate_limit: cfg.rate_limit })
    }

    /// crt.sh query syntax uses `%` where DNS uses `*`.
    fn query_url(query: &str) -> String {
        let q = match query.strip_prefix("*.") {
            Some(base) => format!("%.{base}"),
            None => query.to_string(),
        };
        format!("https://crt.sh/?q={}&output=json", urlencoding::encode(&q))
    }
}

#[async_trait]
impl SubdomainSource for CrtShSource {
    fn name(&self) -> &'static str {
        "crt.sh"
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>, SubhunterError> {
        if !self.rate_limit.is_zero() {
            tokio::time::sleep(self.rate_limit).await;
        }

        let url = Self::query_url(query);
        tracing::debug!(%query, %url, "querying crt.sh");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SubhunterError::transport(query, e))?;

        let body = resp
            .text()
            .await
            .map_err(|e| SubhunterError::transport(query, e))?;

        // crt.sh returns non-JSON bodies on overload; surface that as a
        // parse failure so the enumerator can treat it as an empty result.
        let entries: Vec<CrtShEntry> =
            serde_json::from_str(&body).map_err(|e| SubhunterError::parse(query, e))?;

        let records = entries.into_iter().filter_map(|e| e.name_value).collect::<Vec<_>>();
        tracing::debug!(%query, records = records.len(), "crt.sh responded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_queries_use_percent_syntax() {
        assert_eq!(
            CrtShSource::query_url("*.dev.example.com"),
            "https://crt.sh/?q=%25.dev.example.com&output=json"
        );
    }

    #[test]
    fn plain_queries_pass_through() {
        assert_eq!(
            CrtShSource::query_url("example.com"),
            "https://crt.sh/?q=example.com&output=json"
        );
    }
}
