pub mod instagram;
pub mod tiktok;

pub use instagram::InstagramSamples;
pub use tiktok::TikTokSamples;

/// Offset added to the record index when building sample content URLs
pub const URL_ID_OFFSET: u64 = 100_000;

/// Preview image shared by every sample record
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200x300";

pub const SAMPLE_AUTHOR: &str = "user";

pub const SAMPLE_DURATION_SEC: u32 = 15;

/// Filters accepted by the trends endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendsFilter {
    pub hashtag: Option<String>,
}

impl TrendsFilter {
    pub fn hashtag(hashtag: impl Into<String>) -> Self {
        Self {
            hashtag: Some(hashtag.into()),
        }
    }
}

/// Source of video records for one platform.
///
/// The sample implementations accept every filter and ignore it. A real
/// scraper replaces them by implementing this trait; callers keep sending the
/// same request shape either way.
pub trait VideoSource<V>: Send + Sync {
    /// Trending videos, optionally narrowed by `filter`
    fn trends(&self, filter: &TrendsFilter, count: usize) -> Vec<V>;

    /// Videos matching a free-text query
    fn search(&self, query: &str, count: usize) -> Vec<V>;
}

/// Sample id for the record at `index`
pub(crate) fn sample_id(index: usize) -> String {
    format!("sample{}", index)
}

pub(crate) fn url_id(index: usize) -> u64 {
    URL_ID_OFFSET + index as u64
}
