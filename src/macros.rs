//! # Declaring Record Types
//!
//! [`input!`](crate::input) declares a record struct together with the metadata the hydrator
//! reflects over. Each field may carry a default after `=`; a defaulted field also gets a
//! `default_<field>()` associated function returning that value.
//!
//! ```rust
//! use input_hydrator::{input, input_union, hydrate, Request};
//!
//! input! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Filter {
//!         pub maximum_price: Option<i64>,
//!         pub minimum_price: Option<i64>,
//!     }
//! }
//!
//! input_union! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub enum FilterOrQuery {
//!         Filter(Filter),
//!         Query(String),
//!     }
//! }
//!
//! input! {
//!     #[derive(Debug)]
//!     pub struct Search {
//!         pub query: String,
//!         pub limit: Option<i64> = Some(100),
//!         pub filter: Option<FilterOrQuery> = None,
//!     }
//! }
//!
//! let request: Request =
//!     serde_json::from_str(r#"{"query": "shoes", "filter": "maximum_price=100"}"#).unwrap();
//! let search: Search = hydrate(&request).unwrap();
//! assert_eq!(search.limit, Search::default_limit());
//! assert_eq!(search.filter, Some(FilterOrQuery::Query("maximum_price=100".into())));
//! ```
//!
//! Field types are limited to what implements [`FieldValue`](crate::FieldValue): `String`,
//! `i64`, `f64`, `bool`, other `input!` records, `input_union!` enums, and `Option` of any of
//! them. Anything else is rejected by the compiler instead of at hydration time. A union may
//! list `null` among its alternatives to decide where blank values turn into null.

/// Declares a record struct and implements [`Input`](crate::Input) and
/// [`FieldValue`](crate::FieldValue) for it.
#[macro_export]
macro_rules! input {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $( = $default:expr )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        $crate::__private::paste! {
            #[allow(dead_code)]
            impl $name {
                $($(
                    #[doc = concat!("Declared default of the `", stringify!($field), "` field.")]
                    pub fn [<default_ $field>]() -> $ty {
                        $default
                    }
                )?)*
            }

            impl $crate::Input for $name {
                const NAME: &'static str = stringify!($name);

                fn schema() -> $crate::Schema {
                    $crate::Schema::new(<Self as $crate::Input>::NAME)
                    $(
                        .field($crate::__input_default!(
                            $crate::FieldDescriptor::typed::<$ty>(stringify!($field)),
                            [<default_ $field>],
                            $($default)?
                        ))
                    )*
                }

                #[allow(unused_mut)]
                fn from_record(
                    mut record: $crate::Record,
                ) -> ::core::result::Result<Self, $crate::HydrateError> {
                    ::core::result::Result::Ok(Self {
                        $( $field: record.take::<$ty>(stringify!($field))?, )*
                    })
                }
            }
        }

        impl $crate::FieldValue for $name {
            fn field_type() -> $crate::FieldType {
                $crate::FieldType::Input($crate::InputType::of::<Self>())
            }

            fn accepts(value: &$crate::Hydrated) -> bool {
                ::core::matches!(
                    value,
                    $crate::Hydrated::Record(record)
                        if record.input() == <Self as $crate::Input>::NAME
                )
            }

            fn from_hydrated(
                value: $crate::Hydrated,
            ) -> ::core::result::Result<Self, $crate::HydrateError> {
                match value {
                    $crate::Hydrated::Record(record)
                        if record.input() == <Self as $crate::Input>::NAME =>
                    {
                        <Self as $crate::Input>::from_record(record)
                    }
                    other => ::core::result::Result::Err($crate::unassignable::<Self>(&other)),
                }
            }

            fn into_hydrated(self) -> $crate::Hydrated {
                #[allow(unused_mut)]
                let mut record = $crate::Record::new(<Self as $crate::Input>::NAME);
                $(
                    record.insert(
                        stringify!($field),
                        $crate::FieldValue::into_hydrated(self.$field),
                    );
                )*
                $crate::Hydrated::Record(record)
            }
        }
    };
}

/// Attaches a field's declared default to its descriptor, when it has one.
#[doc(hidden)]
#[macro_export]
macro_rules! __input_default {
    ($descriptor:expr, $getter:ident, ) => {
        $descriptor
    };
    ($descriptor:expr, $getter:ident, $default:expr) => {
        $descriptor.with_default($crate::FieldValue::into_hydrated(Self::$getter()))
    };
}

/// Declares a closed union of field types. Alternatives are tried in declaration order.
///
/// A bare `null` entry places the null alternative at that position: a blank value (`""`
/// or null) stops there as null before later alternatives see it. A union with `null` must
/// be declared as `Option<Union>`, since the enum itself has no null variant. Without a
/// `null` entry, wrapping the enum in `Option` tries null after every alternative.
///
/// ```rust
/// use input_hydrator::{input, input_union, hydrate, Request};
///
/// input_union! {
///     #[derive(Debug, PartialEq)]
///     pub enum Tag {
///         null,
///         Id(i64),
///         Name(String),
///     }
/// }
///
/// input! {
///     #[derive(Debug)]
///     pub struct Post {
///         pub tag: Option<Tag>,
///     }
/// }
///
/// let request: Request = serde_json::from_str(r#"{"tag": ""}"#).unwrap();
/// assert_eq!(hydrate::<Post>(&request).unwrap().tag, None);
///
/// let request: Request = serde_json::from_str(r#"{"tag": "7"}"#).unwrap();
/// assert_eq!(hydrate::<Post>(&request).unwrap().tag, Some(Tag::Id(7)));
/// ```
#[macro_export]
macro_rules! input_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::__input_union! {
            @parse [$(#[$meta])*] [$vis] $name [] [] $($body)*
        }
    };
}

/// Splits an `input_union!` body into enum variants and union alternatives.
#[doc(hidden)]
#[macro_export]
macro_rules! __input_union {
    (@parse $attrs:tt $vis:tt $name:ident $variants:tt [$($alts:tt)*]
        null $(, $($rest:tt)*)?
    ) => {
        $crate::__input_union! {
            @parse $attrs $vis $name $variants
            [$($alts)* ($crate::FieldType::Null)]
            $($($rest)*)?
        }
    };
    (@parse $attrs:tt $vis:tt $name:ident [$($variants:tt)*] [$($alts:tt)*]
        $(#[$variant_meta:meta])* $variant:ident($ty:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::__input_union! {
            @parse $attrs $vis $name
            [$($variants)* ([$(#[$variant_meta])*] $variant $ty)]
            [$($alts)* (<$ty as $crate::FieldValue>::field_type())]
            $($($rest)*)?
        }
    };
    (@parse [$($attrs:tt)*] [$($vis:tt)*] $name:ident
        [$(([$($variant_attrs:tt)*] $variant:ident $ty:ty))+]
        [$(($alt:expr))+]
    ) => {
        $($attrs)*
        $($vis)* enum $name {
            $(
                $($variant_attrs)*
                $variant($ty),
            )+
        }

        impl $crate::FieldValue for $name {
            fn field_type() -> $crate::FieldType {
                $crate::FieldType::Union(::std::vec![$($alt),+])
            }

            fn accepts(value: &$crate::Hydrated) -> bool {
                $( <$ty as $crate::FieldValue>::accepts(value) )||+
            }

            fn from_hydrated(
                value: $crate::Hydrated,
            ) -> ::core::result::Result<Self, $crate::HydrateError> {
                $(
                    if <$ty as $crate::FieldValue>::accepts(&value) {
                        return <$ty as $crate::FieldValue>::from_hydrated(value)
                            .map($name::$variant);
                    }
                )+
                ::core::result::Result::Err($crate::unassignable::<Self>(&value))
            }

            fn into_hydrated(self) -> $crate::Hydrated {
                match self {
                    $( $name::$variant(inner) => $crate::FieldValue::into_hydrated(inner), )+
                }
            }
        }
    };
}
