use input_hydrator::input;

input! {
    /// Price range narrowing a [`Search`](crate::model::Search).
    ///
    /// Both bounds are optional, so an empty map hydrates to a filter with no bounds.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Filter {
        pub maximum_price: Option<i64>,
        pub minimum_price: Option<i64>,
    }
}
