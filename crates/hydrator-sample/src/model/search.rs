use crate::model::Filter;
use input_hydrator::{input, input_union};

input! {
    /// A product search.
    ///
    /// `limit` defaults to 100 when absent and becomes `None` when sent blank.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Search {
        pub query: String,
        pub limit: Option<i64> = Some(100),
        pub filter: Option<Filter> = None,
    }
}

input_union! {
    /// A filter sent either structured or as a raw query string. A blank filter is no
    /// filter at all, never an empty query.
    #[derive(Debug, Clone, PartialEq)]
    pub enum SearchFilter {
        null,
        Filter(Filter),
        Query(String),
    }
}

input! {
    /// [`Search`] whose filter may also arrive as a raw query string.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UnionTypeSearch {
        pub query: String,
        pub limit: Option<i64> = Some(100),
        pub filter: Option<SearchFilter> = None,
    }
}
