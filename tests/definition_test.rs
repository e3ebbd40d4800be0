use input_hydrator::{
    FieldDescriptor, FieldType, HydrateError, Hydrator, Input, Record, Request, Schema, TypeError,
    Value,
};

// --- Broken Inputs ---
//
// `input!` only accepts supported field types, so broken declarations come from
// hand-maintained schemas like these.

macro_rules! broken_input {
    ($name:ident, $field:expr) => {
        #[derive(Debug)]
        struct $name;

        impl Input for $name {
            const NAME: &'static str = stringify!($name);

            fn schema() -> Schema {
                Schema::new(Self::NAME).field($field)
            }

            fn from_record(_: Record) -> Result<Self, HydrateError> {
                Ok(Self)
            }
        }
    };
}

broken_input!(
    NonInputProperty,
    FieldDescriptor::new("something", FieldType::Class("PathBuf"))
);
broken_input!(ArrayProperty, FieldDescriptor::new("fields", FieldType::Array));
broken_input!(
    IterableProperty,
    FieldDescriptor::new("fields", FieldType::Iterable)
);
broken_input!(ObjectProperty, FieldDescriptor::new("fields", FieldType::Object));
broken_input!(UntypedProperty, FieldDescriptor::untyped("fields"));
broken_input!(
    NullableArrayProperty,
    FieldDescriptor::new("fields", FieldType::nullable(FieldType::Array))
);

fn request_with_fields() -> Request {
    let mut request = Request::new();
    request.insert("fields".into(), Value::List(Vec::new()));
    request.insert("something".into(), Value::from("hello"));
    request
}

fn type_error<T: Input + std::fmt::Debug>(request: &Request) -> TypeError {
    match Hydrator::new().hydrate::<T>(request) {
        Err(HydrateError::Type(e)) => e,
        other => panic!("expected a type error, got {other:?}"),
    }
}

// --- Tests ---

#[test]
fn test_non_input_class_is_unsupported() {
    let err = type_error::<NonInputProperty>(&request_with_fields());
    assert_eq!(
        err.to_string(),
        "Property \"something\" of \"NonInputProperty\" input has an unsupported type ( \"PathBuf\" )."
    );
}

#[test]
fn test_generic_containers_are_unsupported() {
    let request = request_with_fields();

    assert_eq!(
        type_error::<ArrayProperty>(&request),
        TypeError::unsupported_property_type("ArrayProperty", "fields", "array")
    );
    assert_eq!(
        type_error::<IterableProperty>(&request),
        TypeError::unsupported_property_type("IterableProperty", "fields", "iterable")
    );
    assert_eq!(
        type_error::<ObjectProperty>(&request),
        TypeError::unsupported_property_type("ObjectProperty", "fields", "object")
    );
    assert_eq!(
        type_error::<NullableArrayProperty>(&request),
        TypeError::unsupported_property_type("NullableArrayProperty", "fields", "array")
    );
}

#[test]
fn test_untyped_property() {
    assert_eq!(
        type_error::<UntypedProperty>(&request_with_fields()),
        TypeError::missing_property_type("UntypedProperty", "fields")
    );
}

#[test]
fn test_definitional_errors_ignore_request_content() {
    let empty = Request::new();

    assert!(type_error::<NonInputProperty>(&empty).to_string().contains("PathBuf"));
    assert!(matches!(
        type_error::<ArrayProperty>(&empty),
        TypeError::UnsupportedPropertyType { .. }
    ));
    assert!(matches!(
        type_error::<UntypedProperty>(&empty),
        TypeError::MissingPropertyType { .. }
    ));
    // nullable does not make an unsupported type acceptable
    assert!(matches!(
        type_error::<NullableArrayProperty>(&empty),
        TypeError::UnsupportedPropertyType { .. }
    ));
}

#[test]
fn test_validate_reports_the_same_errors() {
    let hydrator = Hydrator::new();

    assert_eq!(
        hydrator.validate::<ArrayProperty>().unwrap_err(),
        HydrateError::from(TypeError::unsupported_property_type(
            "ArrayProperty",
            "fields",
            "array"
        ))
    );
    assert!(hydrator.validate::<UntypedProperty>().unwrap_err().is_definitional());
}

#[test]
fn test_definitional_error_beats_missing_field() {
    let schema = Schema::new("Mixed")
        .field(FieldDescriptor::new("query", FieldType::String))
        .field(FieldDescriptor::new("tags", FieldType::Array));

    let err = Hydrator::new()
        .hydrate_schema(&schema, &Request::new())
        .unwrap_err();
    assert!(err.is_definitional());
}
