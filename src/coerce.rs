//! # Type Coercion
//!
//! Converts one raw [`Value`] into a field's declared [`FieldType`]. Scalars follow fixed
//! conversion rules rather than free-form parsing: `"25"` is an int, `"025"` is not, `"1"`
//! is `true`. Nested record types recurse into the [`Hydrator`].
//!
//! Failures come in the two [`HydrateError`] kinds. Unions rely on the difference: a bad
//! value makes the next alternative worth trying, a definitional error does not.

use crate::error::{BadInputError, HydrateError, TypeError};
use crate::hydrator::Hydrator;
use crate::schema::{FieldType, Hydrated, InputType};
use crate::value::{Request, Value};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]*\.)?[0-9]+(?:[eE][0-9]+)?$").expect("valid decimal pattern")
});

/// Identity of the field being coerced, for error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldContext<'a> {
    pub input: &'static str,
    pub property: &'static str,
    pub key: &'a str,
}

impl Hydrator {
    pub(crate) fn coerce(
        &self,
        cx: FieldContext<'_>,
        value: &Value,
        ty: &FieldType,
        depth: usize,
    ) -> Result<Hydrated, HydrateError> {
        match ty {
            FieldType::Union(alternatives) => {
                self.coerce_union(cx, value, ty, alternatives, ty.allows_null(), depth)
            }
            FieldType::Nullable(inner) => match inner.as_ref() {
                FieldType::Union(alternatives) => {
                    self.coerce_union(cx, value, ty, alternatives, true, depth)
                }
                named => self.coerce_named(cx, value, named, true, depth),
            },
            named => self.coerce_named(cx, value, named, false, depth),
        }
    }

    fn coerce_union(
        &self,
        cx: FieldContext<'_>,
        value: &Value,
        union: &FieldType,
        alternatives: &[FieldType],
        nullable: bool,
        depth: usize,
    ) -> Result<Hydrated, HydrateError> {
        for alternative in alternatives {
            match self.coerce(cx, value, alternative, depth) {
                Ok(hydrated) => {
                    trace!(key = cx.key, %alternative, "Union alternative matched");
                    return Ok(hydrated);
                }
                Err(err) if err.is_definitional() || is_too_deep(&err) => return Err(err),
                Err(err) => trace!(key = cx.key, %alternative, error = %err, "Union alternative rejected"),
            }
        }

        if nullable && value.is_blank() {
            return Ok(Hydrated::Null);
        }

        Err(BadInputError::invalid_field_type(cx.key, union.to_string(), value.type_name()).into())
    }

    fn coerce_named(
        &self,
        cx: FieldContext<'_>,
        value: &Value,
        ty: &FieldType,
        nullable: bool,
        depth: usize,
    ) -> Result<Hydrated, HydrateError> {
        let coerced = match ty {
            FieldType::Input(input) => return self.coerce_record(cx, value, input, depth),
            FieldType::Array | FieldType::Iterable | FieldType::Object | FieldType::Class(_) => {
                return Err(
                    TypeError::unsupported_property_type(cx.input, cx.property, ty.to_string())
                        .into(),
                );
            }
            FieldType::Nullable(_) | FieldType::Union(_) => {
                return self.coerce(cx, value, ty, depth);
            }
            FieldType::String => coerce_string(value),
            FieldType::Int => coerce_int(value),
            FieldType::Float => coerce_float(value),
            FieldType::Bool => coerce_bool(value),
            FieldType::Null => None,
        };

        if let Some(hydrated) = coerced {
            return Ok(hydrated);
        }

        if (nullable || ty.allows_null()) && value.is_blank() {
            return Ok(Hydrated::Null);
        }

        Err(BadInputError::invalid_field_type(cx.key, ty.to_string(), value.type_name()).into())
    }

    /// A nested record needs a map. Nullability does not apply here: a blank value is as
    /// wrong as any other scalar. An empty list stands in for an empty map.
    fn coerce_record(
        &self,
        cx: FieldContext<'_>,
        value: &Value,
        input: &InputType,
        depth: usize,
    ) -> Result<Hydrated, HydrateError> {
        let empty = Request::new();
        let request = match value {
            Value::Map(request) => request,
            Value::List(items) if items.is_empty() => &empty,
            _ => {
                return Err(
                    BadInputError::invalid_field_type(cx.key, input.name, value.type_name()).into(),
                )
            }
        };

        if depth >= self.max_depth() {
            return Err(BadInputError::TooDeep {
                field: cx.key.to_string(),
                max_depth: self.max_depth(),
            }
            .into());
        }

        let schema = (input.schema)();
        self.hydrate_at(&schema, request, depth + 1)
            .map(Hydrated::Record)
    }
}

fn is_too_deep(err: &HydrateError) -> bool {
    matches!(err, HydrateError::BadInput(BadInputError::TooDeep { .. }))
}

fn coerce_string(value: &Value) -> Option<Hydrated> {
    match value {
        Value::String(s) => Some(Hydrated::String(s.clone())),
        _ => None,
    }
}

/// Strings must round-trip exactly, so `"025"`, `"+5"` and `" 5"` are rejected. A
/// non-empty run of zeros reads as `0`.
fn coerce_int(value: &Value) -> Option<Hydrated> {
    match value {
        Value::Int(i) => Some(Hydrated::Int(*i)),
        Value::String(s) => {
            let stripped = s.trim_start_matches('0');
            if stripped.is_empty() {
                return (!s.is_empty()).then_some(Hydrated::Int(0));
            }
            let parsed: i64 = stripped.parse().ok()?;
            (parsed.to_string() == *s).then_some(Hydrated::Int(parsed))
        }
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<Hydrated> {
    match value {
        Value::Float(f) => Some(Hydrated::Float(*f)),
        Value::Int(i) => Some(Hydrated::Float(*i as f64)),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) if s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok().map(Hydrated::Float)
        }
        Value::String(s) if DECIMAL.is_match(s) => s.parse().ok().map(Hydrated::Float),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<Hydrated> {
    match value {
        Value::Bool(b) => Some(Hydrated::Bool(*b)),
        Value::Int(1) => Some(Hydrated::Bool(true)),
        Value::Int(0) => Some(Hydrated::Bool(false)),
        Value::String(s) if s == "1" => Some(Hydrated::Bool(true)),
        Value::String(s) if s == "0" => Some(Hydrated::Bool(false)),
        _ => None,
    }
}
