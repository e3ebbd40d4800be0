//! # Observability & Tracing
//!
//! The hydrator logs through the `tracing` crate and never installs a subscriber itself.
//! Host applications that have no subscriber of their own can call [`setup_tracing`].
//!
//! ## What Gets Traced
//!
//! - **Failures** (`debug`): the record name and the error that aborted the call.
//! - **Validation** (`debug`): how many record types a schema graph covers.
//! - **Fields** (`trace`): every resolved field with its request key, nesting depth and
//!   hydrated kind, plus which union alternative matched.
//!
//! ```bash
//! RUST_LOG=input_hydrator=debug cargo run -p hydrator-sample
//! RUST_LOG=input_hydrator=trace cargo run -p hydrator-sample
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
