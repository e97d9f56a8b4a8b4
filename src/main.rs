use anyhow::Context;

use blog_api::{build_router, observability, AppState, Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    observability::init_tracing(&config.service).context("failed to initialize tracing")?;

    let state = AppState::new(config.clone()).context("failed to wire application state")?;
    let app = build_router(state);

    Server::new(config.service)
        .serve(app)
        .await
        .context("server error")?;

    Ok(())
}
