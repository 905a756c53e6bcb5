//! Typed clients for the placeholder scraper services.

pub mod error;

pub use error::{ClientError, Result};

use domain::{InstagramReel, Platform, TikTokVideo};
use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};

/// Environment variable holding the Instagram service base URL
pub const INSTAGRAM_URL_ENV: &str = "INSTAGRAM_SCRAPER_URL";

/// Environment variable holding the TikTok service base URL
pub const TIKTOK_URL_ENV: &str = "TIKTOK_SCRAPER_URL";

#[derive(Debug, Deserialize)]
struct HealthResponse {
    ok: bool,
}

/// HTTP plumbing shared by the per-platform clients
#[derive(Debug, Clone)]
struct ScraperHttp {
    client: reqwest::Client,
    base_url: Url,
}

impl ScraperHttp {
    fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
        })
    }

    fn from_env(platform: Platform, var: &str) -> Result<Self> {
        Self::from_lookup(platform, var, |key| std::env::var(key).ok())
    }

    /// Empty or blank values count as unset
    fn from_lookup<F>(platform: Platform, var: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(var)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| platform.default_base_url().to_string());
        Self::new(base_url.trim())
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!(%url, ?query, "requesting scraper");

        let resp = self.client.get(url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.map_err(|e| {
                tracing::debug!(status = status.as_u16(), error = %e, "failed to read error body");
                e
            })?;
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }

    async fn health(&self) -> Result<bool> {
        let health: HealthResponse = self.get_json("health", &[]).await?;
        Ok(health.ok)
    }
}

/// Client for the Instagram placeholder service
#[derive(Debug, Clone)]
pub struct InstagramClient {
    http: ScraperHttp,
}

impl InstagramClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: ScraperHttp::new(base_url)?,
        })
    }

    /// Build from `INSTAGRAM_SCRAPER_URL`, falling back to the in-cluster default
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http: ScraperHttp::from_env(Platform::Instagram, INSTAGRAM_URL_ENV)?,
        })
    }

    pub async fn health(&self) -> Result<bool> {
        self.http.health().await
    }

    pub async fn fetch_trends(&self, hashtag: &str, count: usize) -> Result<Vec<InstagramReel>> {
        let count = count.to_string();
        self.http
            .get_json("trends", &[("hashtag", hashtag), ("count", &count)])
            .await
    }

    pub async fn search(&self, q: &str, count: usize) -> Result<Vec<InstagramReel>> {
        let count = count.to_string();
        self.http
            .get_json("search", &[("q", q), ("count", &count)])
            .await
    }
}

/// Client for the TikTok placeholder service
#[derive(Debug, Clone)]
pub struct TikTokClient {
    http: ScraperHttp,
}

impl TikTokClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: ScraperHttp::new(base_url)?,
        })
    }

    /// Build from `TIKTOK_SCRAPER_URL`, falling back to the in-cluster default
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http: ScraperHttp::from_env(Platform::TikTok, TIKTOK_URL_ENV)?,
        })
    }

    pub async fn health(&self) -> Result<bool> {
        self.http.health().await
    }

    pub async fn fetch_trends(&self, count: usize) -> Result<Vec<TikTokVideo>> {
        let count = count.to_string();
        self.http.get_json("trends", &[("count", &count)]).await
    }

    pub async fn search(&self, q: &str, count: usize) -> Result<Vec<TikTokVideo>> {
        let count = count.to_string();
        self.http
            .get_json("search", &[("q", q), ("count", &count)])
            .await
    }
}
