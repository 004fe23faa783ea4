use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Response};
use tracing::{info, warn};

use crate::config::{Settings, SiteProfile};
use crate::error::{Error, Result};
use crate::liturgy::LiturgyData;
use crate::parser::{self, extract::SaintOfDayRecord};

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const JSON_ACCEPT: &str = "application/json";

/// One HTTP client for the configured timeout, user agent and language.
pub fn build_client(settings: &Settings) -> Result<Client> {
    let mut headers = HeaderMap::new();
    if let Ok(lang) = HeaderValue::from_str(&settings.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, lang);
    }
    let client = Client::builder()
        .timeout(settings.timeout())
        .user_agent(settings.user_agent.as_str())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Fetch the configured saint-of-the-day page once and extract it.
pub async fn fetch_saint_of_day(client: &Client, settings: &Settings) -> Result<SaintOfDayRecord> {
    fetch_saint_page(client, &settings.saint_url, &settings.site).await
}

/// Fetch one saint page and extract it with `profile`.
///
/// A transport error or non-2xx status is returned as is; there is no retry
/// and no partial record.
pub async fn fetch_saint_page(client: &Client, url: &str, profile: &SiteProfile) -> Result<SaintOfDayRecord> {
    let start = Instant::now();
    info!("Fetching saint of the day: {}", url);

    let resp = client.get(url).header(ACCEPT, HTML_ACCEPT).send().await?;
    let html = ensure_success(url, resp).await?.text().await?;
    info!(
        bytes = html.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Fetched saint page"
    );

    Ok(parser::process_page(&html, profile))
}

/// Fetch the readings of one day from the liturgy endpoint.
pub async fn fetch_liturgy(client: &Client, settings: &Settings, date: NaiveDate) -> Result<LiturgyData> {
    let url = liturgy_url(&settings.liturgy_url, date);
    info!("Fetching liturgy: {}", url);

    let resp = client.get(&url).header(ACCEPT, JSON_ACCEPT).send().await?;
    let body = ensure_success(&url, resp).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| Error::Parse(format!("liturgy payload: {e}")))
}

pub fn liturgy_url(base: &str, date: NaiveDate) -> String {
    format!("{}?dia={}&mes={}&ano={}", base, date.day(), date.month(), date.year())
}

async fn ensure_success(url: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    warn!("Request to {} failed with status {}", url, status);
    Err(Error::Status {
        url: url.to_string(),
        status,
    })
}
