//! # Shopfront Headless Demo Entry Point
//!
//! Runs one browse/filter/cart/theme session against the real catalog
//! endpoint. The interesting code lives in the library (`shopfront_app`);
//! this binary only owns the runtime and the exit code.

use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(err) = shopfront_app::run().await {
        error!(%err, "shopfront session failed");
        std::process::exit(1);
    }
}
