//! # Hydration Errors
//!
//! Every failure of a hydration call is one of two kinds:
//!
//! - [`BadInputError`]: the request is malformed (a required field is missing or a value
//!   cannot be coerced). This is the caller's problem and is usually reported back to the
//!   end user as a rejected request.
//! - [`TypeError`]: the record type itself is declared wrongly (an untyped field, a field
//!   of an unsupported type). This is a programming error and never depends on the request.
//!
//! [`HydrateError`] wraps both so a single `?` carries either one through nested calls.

/// Errors caused by the request data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadInputError {
    #[error("required field \"{field}\" is missing from the request.")]
    MissingField { field: String },

    #[error("field \"{field}\" has an incorrect type of \"{actual}\", \"{expected}\" was expected.")]
    InvalidFieldType {
        field: String,
        expected: String,
        actual: String,
    },

    /// The request nests records deeper than the hydrator allows.
    #[error("field \"{field}\" nests records deeper than the allowed {max_depth} levels.")]
    TooDeep { field: String, max_depth: usize },
}

impl BadInputError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_field_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Errors caused by a malformed record type declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("Property \"{property}\" of \"{input}\" input is not typed.")]
    MissingPropertyType { input: String, property: String },

    #[error("Property \"{property}\" of \"{input}\" input has an unsupported type ( \"{type_name}\" ).")]
    UnsupportedPropertyType {
        input: String,
        property: String,
        type_name: String,
    },

    /// The schema produced a value the Rust type cannot hold. The schema and the
    /// struct it describes disagree.
    #[error("cannot assign a \"{actual}\" value to \"{target}\" ( \"{expected}\" was declared ).")]
    Unassignable {
        target: String,
        expected: String,
        actual: String,
    },
}

impl TypeError {
    pub fn missing_property_type(input: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MissingPropertyType {
            input: input.into(),
            property: property.into(),
        }
    }

    pub fn unsupported_property_type(
        input: impl Into<String>,
        property: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnsupportedPropertyType {
            input: input.into(),
            property: property.into(),
            type_name: type_name.into(),
        }
    }
}

/// Any error returned by a hydration call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HydrateError {
    #[error(transparent)]
    BadInput(#[from] BadInputError),
    #[error(transparent)]
    Type(#[from] TypeError),
}

impl HydrateError {
    /// True when the request data is at fault.
    pub fn is_bad_input(&self) -> bool {
        matches!(self, HydrateError::BadInput(_))
    }

    /// True when the record type declaration is at fault.
    pub fn is_definitional(&self) -> bool {
        matches!(self, HydrateError::Type(_))
    }
}
