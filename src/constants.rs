//! Default settings for [`Hydrator`](crate::Hydrator).

/// How many levels of nested records a request may carry below the top-level record.
pub const DEFAULT_MAX_DEPTH: usize = 32;
