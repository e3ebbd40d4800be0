//! # The Hydrator
//!
//! [`Hydrator`] populates record types from decoded request data. For every declared field it
//!
//! 1. derives the request key from the field name ([`field_key`]),
//! 2. resolves the raw value, the declared default, or null,
//! 3. coerces the raw value into the declared type, recursing for nested records,
//!
//! and assembles the instance once every field has a value. Any failure aborts the call;
//! partially hydrated instances are never returned.
//!
//! ## Concurrency
//!
//! The hydrator keeps no per-call state. A single instance can be shared between threads
//! and called concurrently; nested records are plain recursive calls.
//!
//! ```rust
//! use input_hydrator::{input, Hydrator, Request};
//!
//! input! {
//!     #[derive(Debug)]
//!     pub struct Search {
//!         pub query: String,
//!         pub limit: Option<i64> = Some(100),
//!     }
//! }
//!
//! let request: Request = serde_json::from_str(r#"{"query": "rust", "limit": "25"}"#).unwrap();
//! let search: Search = Hydrator::new().hydrate(&request).unwrap();
//! assert_eq!(search.query, "rust");
//! assert_eq!(search.limit, Some(25));
//! ```

use crate::coerce::FieldContext;
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::error::{HydrateError, TypeError};
use crate::naming::field_key;
use crate::resolve::{resolve, Resolution};
use crate::schema::{Hydrated, Input, Record, Schema};
use crate::value::Request;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Stateless hydration engine.
#[derive(Debug, Clone, Copy)]
pub struct Hydrator {
    max_depth: usize,
}

impl Default for Hydrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hydrator {
    /// Creates a hydrator that accepts up to [`DEFAULT_MAX_DEPTH`] levels of nested records.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a hydrator with a custom nesting limit.
    ///
    /// The limit guards against schemas that refer back to themselves: such a schema accepts
    /// arbitrarily deep requests, and each level costs a recursive call.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Hydrates `T` from the request.
    ///
    /// # Errors
    ///
    /// - [`HydrateError::BadInput`] if a required field is missing or a value cannot be
    ///   coerced into its declared type.
    /// - [`HydrateError::Type`] if `T` declares an untyped field or a field of an
    ///   unsupported type. This fires regardless of the request content.
    pub fn hydrate<T: Input>(&self, request: &Request) -> Result<T, HydrateError> {
        let record = self.hydrate_schema(&T::schema(), request)?;
        T::from_record(record)
    }

    /// Hydrates a type-erased [`Record`] for a schema the caller maintains itself.
    pub fn hydrate_schema(&self, schema: &Schema, request: &Request) -> Result<Record, HydrateError> {
        let result = self.hydrate_at(schema, request, 0);
        if let Err(err) = &result {
            debug!(input = schema.name(), error = %err, "Hydration failed");
        }
        result
    }

    pub(crate) fn hydrate_at(
        &self,
        schema: &Schema,
        request: &Request,
        depth: usize,
    ) -> Result<Record, HydrateError> {
        let input = schema.name();
        schema.check()?;

        let mut record = Record::new(input);
        for field in schema.fields() {
            let Some(ty) = &field.ty else {
                return Err(TypeError::missing_property_type(input, field.name).into());
            };
            let key = field_key(field.name);

            let value = match resolve(field, ty, &key, request)? {
                Resolution::Present(raw) => {
                    let cx = FieldContext {
                        input,
                        property: field.name,
                        key: &key,
                    };
                    self.coerce(cx, raw, ty, depth)?
                }
                Resolution::Default(default) => {
                    trace!(input, key = %key, "Using declared default");
                    default
                }
                Resolution::Null => Hydrated::Null,
            };

            trace!(input, key = %key, depth, kind = value.kind(), "Field hydrated");
            record.insert(field.name, value);
        }

        Ok(record)
    }

    /// Checks `T` and every record type reachable from it for definitional errors.
    ///
    /// Hydration only checks the records a request actually reaches; call this at start-up or
    /// in tests to cover the whole graph. Self-referencing graphs are walked once per type.
    pub fn validate<T: Input>(&self) -> Result<(), HydrateError> {
        self.validate_schema(&T::schema())
    }

    pub fn validate_schema(&self, schema: &Schema) -> Result<(), HydrateError> {
        let mut seen = HashSet::from([schema.name()]);
        let mut pending = vec![schema.clone()];

        while let Some(schema) = pending.pop() {
            schema.check()?;
            for field in schema.fields() {
                let Some(ty) = &field.ty else { continue };
                for nested in ty.nested_inputs() {
                    if seen.insert(nested.name) {
                        pending.push((nested.schema)());
                    }
                }
            }
        }

        debug!(input = schema.name(), types = seen.len(), "Schema validated");
        Ok(())
    }
}
