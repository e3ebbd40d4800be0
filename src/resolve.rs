//! Presence and default resolution: decides what feeds the coercer for one field.

use crate::error::BadInputError;
use crate::schema::{FieldDescriptor, FieldType, Hydrated};
use crate::value::{Request, Value};

/// Where a field's value comes from.
#[derive(Debug, PartialEq)]
pub(crate) enum Resolution<'a> {
    /// The request carries the key; the raw value still has to be coerced.
    Present(&'a Value),
    /// The declared default, used as-is.
    Default(Hydrated),
    /// Absent and optional.
    Null,
}

/// Presence wins over the default, the default over null. A field with none of the
/// three is missing.
pub(crate) fn resolve<'a>(
    field: &FieldDescriptor,
    ty: &FieldType,
    key: &str,
    request: &'a Request,
) -> Result<Resolution<'a>, BadInputError> {
    if let Some(value) = request.get(key) {
        return Ok(Resolution::Present(value));
    }

    if let Some(default) = &field.default {
        return Ok(Resolution::Default(default.clone()));
    }

    if ty.allows_null() {
        return Ok(Resolution::Null);
    }

    Err(BadInputError::missing_field(key))
}
