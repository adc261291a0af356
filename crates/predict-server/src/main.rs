mod api;
mod cli;
mod config;
mod logging;
mod state;
#[cfg(test)]
mod test_utils;

use crate::cli::Args;
use crate::config::ServerConfig;
use crate::logging::init_tracing;
use crate::state::AppState;
use anyhow::Context;
use clap::Parser;
use forest::{Classifier, RandomForest};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use url_features::NUM_FEATURES;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ServerConfig::resolve(&args)?;
    let _file_guard = init_tracing(config.log_dir.as_deref(), args.log_to_stderr)?;

    info!(
        listen_addr = %config.listen_addr,
        model_path = %config.model_path.display(),
        "predict server starting"
    );
    let model = RandomForest::load(&config.model_path).with_context(|| {
        format!(
            "model artifact {} is missing or invalid; export the trained model there first",
            config.model_path.display()
        )
    })?;
    if model.n_features() != NUM_FEATURES {
        anyhow::bail!(
            "model artifact {} expects {} features, extractor produces {}",
            config.model_path.display(),
            model.n_features(),
            NUM_FEATURES
        );
    }
    info!(
        trees = model.n_trees(),
        classes = ?model.classes(),
        "model loaded"
    );

    let app = api::router(AppState::new(Arc::new(model)));
    let listen_addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen_addr {}", config.listen_addr))?;
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(addr = %listen_addr, "predict server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;
    info!("predict server shutting down");
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
