use domain::Platform;
use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    server::init_tracing();

    let config = ServerConfig::from_env(Platform::Instagram)?;
    let router = instagram_service::create_sample_router(config.count_limit());

    server::run(Platform::Instagram, &config, router).await
}
