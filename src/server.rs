use axum::body::{Body, HttpBody};
use axum::{BoxError, Router};
use lambda_http::Error;
use tracing::info;
use crate::core::controller::{AppState, build_router};
use crate::core::domain::Configuration;
use crate::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

/// Reads configuration from the environment, initialises logging and serves the bookshop API
/// until the server stops.
pub async fn run() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.log_level);
    serve(&config).await
}

pub(crate) async fn serve(config: &Configuration) -> Result<(), Error> {
    if config.lambda {
        info!("serving {} through the lambda runtime", config.stage);
        lambda_http::run(app::<lambda_http::Body>(config).await?).await
    } else {
        info!("serving {} on {}", config.stage, config.bind_addr);
        axum::Server::bind(&config.bind_addr)
            .serve(app::<Body>(config).await?.into_make_service())
            .await?;
        Ok(())
    }
}

// app is generic over the request body so the same routes serve both runtimes
pub(crate) async fn app<B>(config: &Configuration) -> Result<Router<(), B>, Error>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    let state = AppState::build(config).await?;
    Ok(build_router(state))
}
