mod cli;
mod routes;

pub use cli::ServeOptions;
pub use routes::{router, AppState};

use crate::facts::NumbersApiClient;
use crate::prelude::{eprintln, *};
use std::sync::Arc;

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let facts = NumbersApiClient::new(global.facts_url.clone(), global.fact_timeout())?;

    if global.verbose {
        eprintln!(
            "Fun facts from {} (timeout {}s)",
            facts.base_url(),
            global.fact_timeout
        );
    }

    let state = AppState::new(global.identity(), Arc::new(facts));
    let addr = format!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{addr}");
    if global.verbose {
        eprintln!("Identity endpoint: http://{}/", addr);
        eprintln!(
            "Classify endpoint: http://{}/api/classify-number?number=<n>",
            addr
        );
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received"),
        Err(e) => {
            log::error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
