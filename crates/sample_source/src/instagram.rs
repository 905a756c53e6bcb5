use domain::InstagramReel;
use tracing::debug;

use crate::{
    PLACEHOLDER_IMAGE, SAMPLE_AUTHOR, SAMPLE_DURATION_SEC, TrendsFilter, VideoSource, sample_id,
    url_id,
};

/// Generate `count` sample reels in index order.
///
/// Output depends only on `count`.
pub fn sample(count: usize) -> Vec<InstagramReel> {
    (0..count)
        .map(|i| InstagramReel {
            id: sample_id(i),
            author: Some(SAMPLE_AUTHOR.to_string()),
            views: None,
            likes: Some(100 + i as u64),
            duration_sec: Some(SAMPLE_DURATION_SEC),
            thumbnail: Some(PLACEHOLDER_IMAGE.to_string()),
            url: format!("https://www.instagram.com/reel/C{}/", url_id(i)),
        })
        .collect()
}

/// Sample-backed Instagram source
#[derive(Debug, Clone, Copy, Default)]
pub struct InstagramSamples;

impl VideoSource<InstagramReel> for InstagramSamples {
    fn trends(&self, filter: &TrendsFilter, count: usize) -> Vec<InstagramReel> {
        // TODO: fetch the hashtag feed once a real Instagram client exists
        debug!(hashtag = ?filter.hashtag, count, "generating sample instagram trends");
        sample(count)
    }

    fn search(&self, query: &str, count: usize) -> Vec<InstagramReel> {
        debug!(query, count, "generating sample instagram search results");
        sample(count)
    }
}
