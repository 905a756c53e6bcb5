// Client tests against the real routers bound on an ephemeral port.

use api_common::CountLimit;
use axum::Router;
use scraper_client::{ClientError, InstagramClient, TikTokClient};
use tokio::net::TcpListener;

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn instagram_client_round_trip() {
    let base = spawn(instagram_service::create_sample_router(CountLimit::default())).await;
    let client = InstagramClient::new(&base).expect("client");

    assert!(client.health().await.expect("health"));

    let reels = client.fetch_trends("viralreels", 3).await.expect("trends");
    assert_eq!(reels.len(), 3);
    assert_eq!(reels[2].id, "sample2");
    assert_eq!(reels[2].views, None);
    assert_eq!(reels[2].url, "https://www.instagram.com/reel/C100002/");

    let found = client.search("sunsets & beaches", 2).await.expect("search");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].likes, Some(100));
}

#[tokio::test]
async fn tiktok_client_round_trip() {
    let base = spawn(tiktok_service::create_sample_router(CountLimit::default())).await;
    let client = TikTokClient::new(&base).expect("client");

    assert!(client.health().await.expect("health"));

    let videos = client.fetch_trends(4).await.expect("trends");
    assert_eq!(videos.len(), 4);
    assert_eq!(videos[3].views, Some(1003));

    let found = client.search("cats", 0).await.expect("search");
    assert!(found.is_empty());
}

#[tokio::test]
async fn validation_failures_surface_as_status_errors() {
    let base = spawn(tiktok_service::create_sample_router(CountLimit::new(2))).await;
    let client = TikTokClient::new(&base).expect("client");

    match client.fetch_trends(3).await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("count must be at most 2"), "{body}");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn truncated_error_body_is_reported_as_http_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        // Promise more body than is sent, then hang up
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .expect("write");
        let _ = socket.shutdown().await;
    });

    let client = TikTokClient::new(&format!("http://{}", addr)).expect("client");
    match client.fetch_trends(1).await {
        Err(ClientError::Http(_)) => {}
        other => panic!("expected http error, got {other:?}"),
    }
}
