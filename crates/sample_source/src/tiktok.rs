use domain::TikTokVideo;
use tracing::debug;

use crate::{
    PLACEHOLDER_IMAGE, SAMPLE_AUTHOR, SAMPLE_DURATION_SEC, TrendsFilter, VideoSource, sample_id,
    url_id,
};

/// Generate `count` sample TikTok videos in index order
pub fn sample(count: usize) -> Vec<TikTokVideo> {
    (0..count)
        .map(|i| TikTokVideo {
            id: sample_id(i),
            author: Some(SAMPLE_AUTHOR.to_string()),
            views: Some(1000 + i as u64),
            likes: Some(100 + i as u64),
            duration_sec: Some(SAMPLE_DURATION_SEC),
            cover: Some(PLACEHOLDER_IMAGE.to_string()),
            url: format!("https://www.tiktok.com/@user/video/{}", url_id(i)),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TikTokSamples;

impl VideoSource<TikTokVideo> for TikTokSamples {
    fn trends(&self, _filter: &TrendsFilter, count: usize) -> Vec<TikTokVideo> {
        // TODO: swap in the trending feed once a real TikTok client exists
        debug!(count, "generating sample tiktok trends");
        sample(count)
    }

    fn search(&self, query: &str, count: usize) -> Vec<TikTokVideo> {
        debug!(query, count, "generating sample tiktok search results");
        sample(count)
    }
}
