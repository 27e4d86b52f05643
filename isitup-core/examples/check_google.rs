//! Checks google.com once and logs the verdict.
//!
//! Run with `cargo run -p isitup-core --example check_google`.

use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let up = isitup_core::is_up("google.com").await;
    info!(up, "google.com");
}
