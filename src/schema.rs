//! # Record Schemas
//!
//! The hydrator reflects over record types through a [`Schema`]: the record's name and its
//! ordered [`FieldDescriptor`]s. Schemas are usually generated at compile time by the
//! [`input!`](crate::input) macro, which also implements [`Input`] and [`FieldValue`] for the
//! struct. A host that keeps its own type registry can build schemas by hand instead and use
//! [`Hydrator::hydrate_schema`](crate::Hydrator::hydrate_schema).
//!
//! Hydration produces a type-erased [`Record`] first; [`Input::from_record`] then moves each
//! [`Hydrated`] value into the matching struct field.

use crate::error::{HydrateError, TypeError};
use std::collections::HashMap;
use std::fmt;

/// The declared type of a record field.
#[derive(Debug, Clone)]
pub enum FieldType {
    String,
    Int,
    Float,
    Bool,
    /// Only meaningful as a [`FieldType::Union`] alternative.
    Null,
    /// A nested record type.
    Input(InputType),
    /// The wrapped type, or null.
    Nullable(Box<FieldType>),
    /// A closed set of alternatives, tried in declaration order.
    Union(Vec<FieldType>),
    /// Generic list. Always rejected.
    Array,
    /// Generic iterable. Always rejected.
    Iterable,
    /// Generic shapeless object. Always rejected.
    Object,
    /// A named type that is not a record. Always rejected.
    Class(&'static str),
}

impl FieldType {
    pub fn nullable(inner: FieldType) -> Self {
        FieldType::Nullable(Box::new(inner))
    }

    /// Whether a field of this type may hold null.
    pub fn allows_null(&self) -> bool {
        match self {
            FieldType::Null | FieldType::Nullable(_) => true,
            FieldType::Union(alternatives) => alternatives.iter().any(FieldType::allows_null),
            _ => false,
        }
    }

    /// Rejects the generic container and non-record types anywhere inside this type.
    pub(crate) fn check(&self, input: &str, property: &str) -> Result<(), TypeError> {
        match self {
            FieldType::Array | FieldType::Iterable | FieldType::Object | FieldType::Class(_) => Err(
                TypeError::unsupported_property_type(input, property, self.to_string()),
            ),
            FieldType::Nullable(inner) => inner.check(input, property),
            FieldType::Union(alternatives) => alternatives
                .iter()
                .try_for_each(|alternative| alternative.check(input, property)),
            _ => Ok(()),
        }
    }

    /// Nested record types reachable from this type, in declaration order.
    pub(crate) fn nested_inputs(&self) -> Vec<&InputType> {
        match self {
            FieldType::Input(input) => vec![input],
            FieldType::Nullable(inner) => inner.nested_inputs(),
            FieldType::Union(alternatives) => alternatives
                .iter()
                .flat_map(FieldType::nested_inputs)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Int => f.write_str("int"),
            FieldType::Float => f.write_str("float"),
            FieldType::Bool => f.write_str("bool"),
            FieldType::Null => f.write_str("null"),
            FieldType::Input(input) => f.write_str(input.name),
            FieldType::Nullable(inner) => match inner.as_ref() {
                FieldType::Union(_) if inner.allows_null() => write!(f, "{inner}"),
                FieldType::Union(_) => write!(f, "{inner}|null"),
                _ => write!(f, "?{inner}"),
            },
            FieldType::Union(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            }
            FieldType::Array => f.write_str("array"),
            FieldType::Iterable => f.write_str("iterable"),
            FieldType::Object => f.write_str("object"),
            FieldType::Class(name) => f.write_str(name),
        }
    }
}

/// Reference to a nested record type. The schema is built lazily so record graphs may
/// refer back to themselves.
#[derive(Clone, Copy)]
pub struct InputType {
    pub name: &'static str,
    pub schema: fn() -> Schema,
}

impl InputType {
    pub fn of<T: Input>() -> Self {
        Self {
            name: T::NAME,
            schema: T::schema,
        }
    }
}

impl fmt::Debug for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputType").field(&self.name).finish()
    }
}

/// One declared field of a record type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The declared name. The request key is derived from it by [`field_key`](crate::field_key).
    pub name: &'static str,
    /// `None` for a field declared without a type.
    pub ty: Option<FieldType>,
    /// The initialized default, already in its hydrated form.
    pub default: Option<Hydrated>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty: Some(ty),
            default: None,
        }
    }

    pub fn typed<T: FieldValue>(name: &'static str) -> Self {
        Self::new(name, T::field_type())
    }

    pub fn untyped(name: &'static str) -> Self {
        Self {
            name,
            ty: None,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Hydrated) -> Self {
        self.default = Some(default);
        self
    }
}

/// The introspectable shape of a record type.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Checks every field's own declaration, without following nested records.
    pub(crate) fn check(&self) -> Result<(), TypeError> {
        for field in &self.fields {
            match &field.ty {
                None => return Err(TypeError::missing_property_type(self.name, field.name)),
                Some(ty) => ty.check(self.name, field.name)?,
            }
        }
        Ok(())
    }
}

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Hydrated {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Record(Record),
}

impl Hydrated {
    pub fn kind(&self) -> &'static str {
        match self {
            Hydrated::Null => "null",
            Hydrated::Bool(_) => "bool",
            Hydrated::Int(_) => "int",
            Hydrated::Float(_) => "float",
            Hydrated::String(_) => "string",
            Hydrated::Record(record) => record.input(),
        }
    }
}

/// A hydrated record instance, before it is moved into its Rust struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    input: &'static str,
    fields: HashMap<&'static str, Hydrated>,
}

impl Record {
    pub fn new(input: &'static str) -> Self {
        Self {
            input,
            fields: HashMap::new(),
        }
    }

    pub fn input(&self) -> &'static str {
        self.input
    }

    pub fn insert(&mut self, property: &'static str, value: Hydrated) {
        self.fields.insert(property, value);
    }

    pub fn get(&self, property: &str) -> Option<&Hydrated> {
        self.fields.get(property)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Moves a field's value out of the record as the Rust type `T`.
    pub fn take<T: FieldValue>(&mut self, property: &'static str) -> Result<T, HydrateError> {
        let value = self.fields.remove(property).unwrap_or(Hydrated::Null);
        if !T::accepts(&value) {
            return Err(TypeError::Unassignable {
                target: format!("{}::{}", self.input, property),
                expected: T::field_type().to_string(),
                actual: value.kind().to_string(),
            }
            .into());
        }
        T::from_hydrated(value)
    }
}

/// A record type the hydrator can populate.
///
/// Implemented by the [`input!`](crate::input) macro. Hand-written impls must keep
/// [`schema`](Input::schema) and [`from_record`](Input::from_record) in agreement.
pub trait Input: Sized {
    /// Record name used in error messages and to tell records apart inside unions.
    const NAME: &'static str;

    fn schema() -> Schema;

    fn from_record(record: Record) -> Result<Self, HydrateError>;
}

/// A Rust type that can be declared as a record field.
pub trait FieldValue: Sized {
    fn field_type() -> FieldType;

    /// Whether `value` has the shape this type is assembled from.
    fn accepts(value: &Hydrated) -> bool;

    fn from_hydrated(value: Hydrated) -> Result<Self, HydrateError>;

    /// Converts a declared default into its hydrated form.
    fn into_hydrated(self) -> Hydrated;
}

/// Mismatch error for values that skipped [`FieldValue::accepts`].
pub fn unassignable<T: FieldValue>(value: &Hydrated) -> HydrateError {
    let expected = T::field_type().to_string();
    TypeError::Unassignable {
        target: expected.clone(),
        expected,
        actual: value.kind().to_string(),
    }
    .into()
}

macro_rules! scalar_field_value {
    ($ty:ty, $field_type:ident, $variant:ident) => {
        impl FieldValue for $ty {
            fn field_type() -> FieldType {
                FieldType::$field_type
            }

            fn accepts(value: &Hydrated) -> bool {
                matches!(value, Hydrated::$variant(_))
            }

            fn from_hydrated(value: Hydrated) -> Result<Self, HydrateError> {
                match value {
                    Hydrated::$variant(inner) => Ok(inner),
                    other => Err(unassignable::<Self>(&other)),
                }
            }

            fn into_hydrated(self) -> Hydrated {
                Hydrated::$variant(self)
            }
        }
    };
}

scalar_field_value!(String, String, String);
scalar_field_value!(i64, Int, Int);
scalar_field_value!(f64, Float, Float);
scalar_field_value!(bool, Bool, Bool);

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_type() -> FieldType {
        FieldType::nullable(T::field_type())
    }

    fn accepts(value: &Hydrated) -> bool {
        matches!(value, Hydrated::Null) || T::accepts(value)
    }

    fn from_hydrated(value: Hydrated) -> Result<Self, HydrateError> {
        match value {
            Hydrated::Null => Ok(None),
            other => T::from_hydrated(other).map(Some),
        }
    }

    fn into_hydrated(self) -> Hydrated {
        self.map_or(Hydrated::Null, FieldValue::into_hydrated)
    }
}
