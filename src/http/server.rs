use super::callbacks::{options, toggle, update_view};
use super::datasets::{get_dataset, list_datasets};
use super::health::{liveness, readiness};
use super::shell::frontpage;
use super::state::HttpServerState;
use crate::config;
use crate::http::callbacks::{__path_options, __path_toggle, __path_update_view};
use crate::http::datasets::{__path_get_dataset, __path_list_datasets};
use crate::http::health::{__path_liveness, __path_readiness};
use crate::http::shell::__path_frontpage;
use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace;
use tower_http::{ServiceBuilderExt, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Dashboard", description = "Dashboard callbacks"),
        (name = "Health", description = "Health checks"),
    ),
    paths(frontpage, options, update_view, toggle,
        list_datasets, get_dataset,
        liveness, readiness),
)]
struct ApiDoc;

/// Routes of the dashboard, without the server-wide middleware.
pub fn router(state: HttpServerState, body_limit: usize) -> Router {
    let max_body_layer = DefaultBodyLimit::max(body_limit);

    Router::new()
        .route("/", get(frontpage))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .route("/api/options", get(options))
        .route("/api/datasets", get(list_datasets))
        .route("/api/datasets/{dataset_key}", get(get_dataset))
        // Callbacks
        .route(
            "/api/callbacks/view",
            post(update_view).layer(max_body_layer.clone()),
        )
        .route(
            "/api/callbacks/toggle",
            post(toggle).layer(max_body_layer),
        )
        // Health checks
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .with_state(state)
}

pub async fn run_http_server(state: HttpServerState, address: SocketAddr) -> Result<()> {
    let config = config::get()?;
    let body_limit = config.parse_http_body_limit()?;
    let timeout_seconds = config.http_server_timeout_seconds;

    // List of headers that shouldn't be logged
    let sensitive_headers: Arc<[_]> = vec![header::AUTHORIZATION, header::COOKIE].into();

    // Middleware creation
    let middleware = ServiceBuilder::new()
        .sensitive_request_headers(sensitive_headers.clone())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .sensitive_response_headers(sensitive_headers)
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_seconds)))
        .compression()
        .into_inner();

    let app = router(state, body_limit).layer(middleware);

    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install the CTRL+C signal handler: {}", err);
        std::future::pending::<()>().await;
    }
}
