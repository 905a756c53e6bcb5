use api_common::{ApiError, CountLimit, ServiceState, ValidQuery, default_count};
use axum::{Json, Router, extract::State, routing::get};
use domain::InstagramReel;
use sample_source::{InstagramSamples, TrendsFilter, VideoSource};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Hashtag used when `/trends` is called without one
pub const DEFAULT_HASHTAG: &str = "viralreels";

fn default_hashtag() -> String {
    DEFAULT_HASHTAG.to_string()
}

#[derive(Debug, Deserialize)]
pub struct TrendsParams {
    /// Passed to the source; the sample source ignores it
    #[serde(default = "default_hashtag")]
    pub hashtag: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

type InstagramState = ServiceState<InstagramReel>;

async fn trends(
    State(state): State<InstagramState>,
    ValidQuery(params): ValidQuery<TrendsParams>,
) -> Result<Json<Vec<InstagramReel>>, ApiError> {
    let count = state.limit.check(params.count)?;
    let filter = TrendsFilter::hashtag(params.hashtag);
    Ok(Json(state.source.trends(&filter, count)))
}

async fn search(
    State(state): State<InstagramState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> Result<Json<Vec<InstagramReel>>, ApiError> {
    let count = state.limit.check(params.count)?;
    Ok(Json(state.source.search(&params.q, count)))
}

/// Create the router for the Instagram API backed by `source`
pub fn create_router(source: Arc<dyn VideoSource<InstagramReel>>, limit: CountLimit) -> Router {
    Router::new()
        .route("/health", get(api_common::health))
        .route("/trends", get(trends))
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(ServiceState::new(source, limit))
}

/// Router serving generated sample reels
pub fn create_sample_router(limit: CountLimit) -> Router {
    create_router(Arc::new(InstagramSamples), limit)
}
