#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use sheetdash::config::{self, load_configuration};
use sheetdash::http::server::run_http_server;
use sheetdash::http::state::HttpServerState;
use sheetdash::registry::DatasetRegistry;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{Level, event, info};

const TITLE: &str = "Visualizacion Interactiva";

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Load configuration
    load_configuration().context("Failed to load configuration")?;
    let config = config::get().context("Failed to get configuration")?;

    let default_filter = if config.debug {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    // Initialize Sentry if DSN is provided
    let _sentry = config.sentry_dsn.as_ref().map(|dsn| {
        sentry::init((
            dsn.clone(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                debug: config.debug,
                ..Default::default()
            },
        ))
    });

    let sources = config.data_sources();
    info!(
        "Loading {} datasets from {}",
        sources.len(),
        config.data_dir.display()
    );
    let registry = DatasetRegistry::load(&sources)
        .await
        .context("Failed to load datasets")?;

    // Exit the program if a panic occurs
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_panic(info);
        std::process::exit(1);
    }));

    let address = SocketAddr::from((config.endpoint, config.port));

    info!("Starting HTTP server on {}", address);
    match run_http_server(
        HttpServerState {
            name: Arc::new(TITLE.to_string()),
            registry: Arc::new(registry),
        },
        address,
    )
    .await
    {
        Ok(_) => {
            event!(Level::INFO, "HTTP server stopped gracefully");
            Ok(())
        }
        Err(err) => {
            event!(Level::ERROR, "HTTP server failed to start: {}", err);
            Err(err)
        }
    }
}
