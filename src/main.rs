use std::sync::Arc;

use clap::Parser;
use ledgerd::application::ledger::Ledger;
use ledgerd::interfaces::http;
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TCP port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let ledger = Arc::new(Ledger::new());
    let app = http::app(ledger);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port))
        .await
        .into_diagnostic()?;
    tracing::info!("listening on {}", listener.local_addr().into_diagnostic()?);

    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
