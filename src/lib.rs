//! # Input Hydrator
//!
//! > **Typed request inputs from untyped request data.**
//!
//! This crate turns a decoded request (a map of string keys to untyped [`Value`]s) into a
//! strongly-typed record struct. It normalizes field names into request keys, applies
//! presence and default rules, and coerces each value into the field's declared type,
//! recursing into nested records.
//!
//! ## Core Concepts
//!
//! ### Records
//! A record is a struct declared with [`input!`]. The macro generates the [`Schema`] the
//! hydrator reflects over, so no runtime reflection is involved. Closed unions of field
//! types are declared with [`input_union!`].
//!
//! ### Keys
//! Declared field names map to snake-case request keys: `maximumPrice` reads
//! `maximum_price`. See [`field_key`].
//!
//! ### Presence
//! A field present in the request is coerced, even when its value is null. An absent field
//! takes its declared default, then null if its type allows it, and is otherwise reported
//! as missing.
//!
//! ### Coercion
//! Values convert by fixed rules: `"25"` is an int but `"025"` is not, `"0.9"` is a float,
//! `"1"` and `1` are `true`. A blank value (`""` or null) becomes null for nullable scalars; a
//! nested record always needs a map.
//!
//! ## Errors
//!
//! [`HydrateError::BadInput`] reports a malformed request and belongs to the end user.
//! [`HydrateError::Type`] reports a malformed record declaration and belongs to the
//! developer; it fires whatever the request contains. [`Hydrator::validate`] runs the
//! declaration checks over a whole record graph, for start-up checks and tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use input_hydrator::{hydrate, input, HydrateError, Request};
//!
//! input! {
//!     #[derive(Debug)]
//!     pub struct RecaptchaResult {
//!         pub success: bool,
//!         pub action: String,
//!         pub score: f64,
//!     }
//! }
//!
//! let request: Request =
//!     serde_json::from_str(r#"{"success": "1", "action": "login", "score": "0.9"}"#).unwrap();
//! let result: RecaptchaResult = hydrate(&request).unwrap();
//! assert!(result.success);
//! assert_eq!(result.score, 0.9);
//!
//! let request: Request = serde_json::from_str(r#"{"success": "yes"}"#).unwrap();
//! let err = hydrate::<RecaptchaResult>(&request).unwrap_err();
//! assert!(matches!(err, HydrateError::BadInput(_)));
//! ```

mod coerce;
pub mod constants;
pub mod error;
pub mod hydrator;
pub mod logging;
pub mod macros;
pub mod naming;
mod resolve;
pub mod schema;
pub mod value;

// Re-export core types for convenience
pub use constants::DEFAULT_MAX_DEPTH;
pub use error::{BadInputError, HydrateError, TypeError};
pub use hydrator::Hydrator;
pub use naming::field_key;
pub use schema::{
    unassignable, FieldDescriptor, FieldType, FieldValue, Hydrated, Input, InputType, Record,
    Schema,
};
pub use value::{Request, Value};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

/// Hydrates `T` from the request with a default [`Hydrator`].
pub fn hydrate<T: Input>(request: &Request) -> Result<T, HydrateError> {
    Hydrator::new().hydrate(request)
}
