use domain::Platform;
use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    server::init_tracing();

    let config = ServerConfig::from_env(Platform::TikTok)?;
    let router = tiktok_service::create_sample_router(config.count_limit());

    server::run(Platform::TikTok, &config, router).await
}
