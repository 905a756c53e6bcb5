use serde::{Deserialize, Serialize};

/// Represents an Instagram reel
///
/// Optional fields are serialized as `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramReel {
    pub id: String,
    pub author: Option<String>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub duration_sec: Option<u32>,
    pub thumbnail: Option<String>,
    pub url: String,
}

/// Represents a TikTok video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TikTokVideo {
    pub id: String,
    pub author: Option<String>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub duration_sec: Option<u32>,
    pub cover: Option<String>,
    pub url: String,
}

/// Platforms served by a placeholder scraper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    TikTok,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
        }
    }

    /// Human readable service title, used in startup logs
    pub fn title(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram Scraper Placeholder",
            Platform::TikTok => "TikTok Scraper Placeholder",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Platform::Instagram => 8001,
            Platform::TikTok => 8000,
        }
    }

    /// Where callers expect to find the service when nothing else is configured
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Platform::Instagram => "http://instagram-scraper:8001",
            Platform::TikTok => "http://tiktok-scraper:8000",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
