//! plotter: live scrolling plot of a single signal.
//!
//! Run with:  `RUST_LOG=debug plotter`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("plotter v{} starting", env!("CARGO_PKG_VERSION"));

    plot_app::run().map_err(Into::into)
}
