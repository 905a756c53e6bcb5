use api_common::{ApiError, CountLimit, ServiceState, ValidQuery, default_count};
use axum::{Json, Router, extract::State, routing::get};
use domain::TikTokVideo;
use sample_source::{TikTokSamples, TrendsFilter, VideoSource};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct TrendsParams {
    #[serde(default = "default_count")]
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

async fn trends(
    State(state): State<ServiceState<TikTokVideo>>,
    ValidQuery(params): ValidQuery<TrendsParams>,
) -> Result<Json<Vec<TikTokVideo>>, ApiError> {
    let count = state.limit.check(params.count)?;
    Ok(Json(state.source.trends(&TrendsFilter::default(), count)))
}

async fn search(
    State(state): State<ServiceState<TikTokVideo>>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> Result<Json<Vec<TikTokVideo>>, ApiError> {
    let count = state.limit.check(params.count)?;
    Ok(Json(state.source.search(&params.q, count)))
}

// Create the router for the TikTok API
pub fn create_router(source: Arc<dyn VideoSource<TikTokVideo>>, limit: CountLimit) -> Router {
    Router::new()
        .route("/health", get(api_common::health))
        .route("/trends", get(trends))
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(ServiceState::new(source, limit))
}

pub fn create_sample_router(limit: CountLimit) -> Router {
    create_router(Arc::new(TikTokSamples), limit)
}
