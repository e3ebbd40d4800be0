//! # Hydrator Sample
//!
//! Hydrates a handful of decoded requests into the sample inputs and logs the outcome.
//!
//! - **[`hydrator_sample::model`]**: request inputs (`Search`, `UnionTypeSearch`, `RecaptchaResult`) declared
//!   with [`input!`](input_hydrator::input).
//!
//! Requests that fail to hydrate are logged with the error kind a web handler would map to a
//! response: bad input to a 400, a type error to a 500.
//!
//! ```bash
//! RUST_LOG=info cargo run -p hydrator-sample
//! RUST_LOG=input_hydrator=trace cargo run -p hydrator-sample
//! ```

use hydrator_sample::model::{RecaptchaResult, Search, UnionTypeSearch};
use input_hydrator::logging::setup_tracing;
use input_hydrator::{HydrateError, Hydrator, Input, Request};
use std::fmt::Debug;
use tracing::{error, info, warn};

fn decode(body: &str) -> Result<Request, String> {
    serde_json::from_str(body).map_err(|e| format!("request body is not a JSON object: {e}"))
}

fn handle<T: Input + Debug>(hydrator: &Hydrator, body: &str) -> Result<(), String> {
    let span = tracing::info_span!("request", input = T::NAME);
    let _entered = span.enter();

    let request = decode(body)?;
    match hydrator.hydrate::<T>(&request) {
        Ok(input) => info!(?input, "Hydrated"),
        Err(HydrateError::BadInput(e)) => warn!(error = %e, status = 400, "Rejected request"),
        Err(HydrateError::Type(e)) => error!(error = %e, status = 500, "Broken input declaration"),
    }
    Ok(())
}

fn main() -> Result<(), String> {
    setup_tracing();

    let hydrator = Hydrator::new();
    for validation in [
        hydrator.validate::<Search>(),
        hydrator.validate::<UnionTypeSearch>(),
        hydrator.validate::<RecaptchaResult>(),
    ] {
        validation.map_err(|e| e.to_string())?;
    }
    info!(max_depth = hydrator.max_depth(), "Inputs validated");

    handle::<Search>(&hydrator, r#"{"query": "Hello, World!"}"#)?;
    handle::<Search>(
        &hydrator,
        r#"{"query": "shoes", "limit": "25", "filter": {"maximum_price": "100", "minimum_price": "80"}}"#,
    )?;
    handle::<Search>(&hydrator, r#"{"query": "shoes", "limit": "025"}"#)?;
    handle::<Search>(&hydrator, r#"{"limit": "10"}"#)?;
    handle::<UnionTypeSearch>(
        &hydrator,
        r#"{"query": "shoes", "filter": "maximum_price=100&minimum_price=80"}"#,
    )?;
    handle::<UnionTypeSearch>(&hydrator, r#"{"query": "shoes", "filter": ""}"#)?;
    handle::<RecaptchaResult>(
        &hydrator,
        r#"{"success": "1", "action": "registration", "score": "0.9"}"#,
    )?;

    info!("Sample completed");
    Ok(())
}
