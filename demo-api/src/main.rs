use demo_api::{init_tracing, serve, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::load()?;
    serve(config).await
}
