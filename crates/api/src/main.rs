use anyhow::Result;
use assist_api::{serve, ApiConfig};
use assist_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("assist_api");
    serve(ApiConfig::from_env()).await
}
