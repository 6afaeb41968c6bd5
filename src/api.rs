//! Synchronous client for the dashboard stats API.
//!
//! Wraps the per-site endpoints under `/api/stats/{domain}/…` and returns
//! tidy `models` types. Domains and query values are percent-encoded; the
//! API's `{"error": …}` payloads are surfaced as errors instead of decode
//! failures.
//!
//! Typical usage:
//! ```no_run
//! # use dashstats::{Client, Query};
//! let client = Client::default();
//! let graph = client.main_graph("example.com", &Query::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::time::Duration;

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;

use crate::models::{CountryCount, GraphData, PageCount, Query};

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("dashstats/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "http://localhost:8000".into(),
            http,
        }
    }
}

impl Client {
    /// Client against a non-default deployment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

// Allow -, _, . unescaped (common in domains and date strings)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

/// Render query params as `?k=v&…`, empty when there are none.
fn query_string(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined = params
        .iter()
        .map(|(k, v)| format!("{}={}", enc(k), enc(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

impl Client {
    // Small retry for transient failures (5xx / network errors)
    fn get_json(&self, url: &str) -> Result<Value> {
        let mut last_err: Option<anyhow::Error> = None;
        for backoff_ms in [100u64, 300, 700] {
            match self.http.get(url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.json().context("decode json");
                }
                Ok(r) if r.status().is_server_error() => {
                    log::debug!("GET {} returned {}, retrying", url, r.status());
                }
                Ok(r) => bail!("request failed with HTTP {}", r.status()),
                Err(e) => {
                    log::debug!("GET {} failed: {}, retrying", url, e);
                    last_err = Some(e.into());
                }
            }
            std::thread::sleep(Duration::from_millis(backoff_ms));
        }
        bail!("network error: {:?}", last_err);
    }

    fn get_stats(&self, domain: &str, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = format!(
            "{}/api/stats/{}/{}{}",
            self.base_url,
            enc(domain),
            endpoint,
            query_string(params)
        );
        let v = self.get_json(&url).with_context(|| format!("GET {}", url))?;
        if let Some(err) = v.get("error") {
            bail!("stats api error: {}", err);
        }
        Ok(v)
    }

    /// Fetch the visitor graph: labels, plot, present index, optional
    /// comparison plot, interval, and the headline top stats.
    pub fn main_graph(&self, domain: &str, query: &Query) -> Result<GraphData> {
        let v = self.get_stats(domain, "main-graph", &query.params())?;
        serde_json::from_value(v).context("parse main-graph response")
    }

    /// Fetch the per-country visitor counts for the map.
    pub fn countries(&self, domain: &str, query: &Query) -> Result<Vec<CountryCount>> {
        let v = self.get_stats(domain, "countries", &query.params())?;
        serde_json::from_value(v).context("parse countries response")
    }

    /// Fetch the top pages, optionally including bounce rates.
    pub fn pages(
        &self,
        domain: &str,
        query: &Query,
        limit: usize,
        include_bounce_rate: bool,
    ) -> Result<Vec<PageCount>> {
        let mut params = query.params();
        params.push(("limit".to_string(), limit.to_string()));
        if include_bounce_rate {
            params.push(("include".to_string(), "bounce_rate".to_string()));
        }
        let v = self.get_stats(domain, "pages", &params)?;
        serde_json::from_value(v).context("parse pages response")
    }
}
