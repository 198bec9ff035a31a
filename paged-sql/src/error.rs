//! Error type for the query build pipeline.

use std::fmt;

/// Error returned when a request violates the policy or is malformed.
///
/// Every variant names the offending token so API layers can surface a
/// precise message to the caller. A build error always means no query
/// description was produced - there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// Requested SELECT column is not in the selectable whitelist.
    DisallowedSelect {
        /// The normalized column that was rejected.
        column: String,
    },
    /// ORDER BY token names a column outside the orderable whitelist.
    DisallowedOrderBy {
        /// The order-by clause as the caller sent it.
        clause: String,
    },
    /// ORDER BY token has more than two whitespace-separated parts.
    InvalidOrderBy {
        /// The order-by clause as the caller sent it.
        clause: String,
    },
    /// ORDER BY direction keyword is neither `asc` nor `desc`.
    InvalidSortDirection {
        /// The order-by clause as the caller sent it.
        clause: String,
    },
    /// Ordering was requested but the policy whitelists no columns at all.
    NoOrderableColumns,
    /// WHERE argument key has no matching policy filter.
    DisallowedWhereKey {
        /// The normalized key that was rejected.
        key: String,
    },
    /// Two distinct WHERE argument keys normalize to the same filter key.
    AmbiguousWhereKey {
        /// The normalized key both arguments collided on.
        key: String,
    },
    /// A search term was sent but the policy disallows searching.
    SearchDisallowed,
    /// Page numbers are 1-based; zero is never silently clamped.
    InvalidPage {
        /// The page number the caller sent.
        page: u32,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisallowedSelect { column } => {
                write!(f, "query cannot select column '{column}'")
            },
            Self::DisallowedOrderBy { clause } => {
                write!(f, "query cannot order by field '{clause}'")
            },
            Self::InvalidOrderBy { clause } => {
                write!(f, "invalid order_by clause '{clause}'")
            },
            Self::InvalidSortDirection { clause } => {
                write!(f, "invalid sort direction in order_by clause '{clause}'")
            },
            Self::NoOrderableColumns => {
                write!(f, "no orderable columns configured")
            },
            Self::DisallowedWhereKey { key } => {
                write!(f, "where argument '{key}' not allowed")
            },
            Self::AmbiguousWhereKey { key } => {
                write!(f, "where arguments collide on key '{key}' after normalization")
            },
            Self::SearchDisallowed => {
                write!(f, "search term is disallowed by config")
            },
            Self::InvalidPage { page } => {
                write!(f, "invalid page: {page}")
            },
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_token() {
        let err = BuildError::DisallowedSelect {
            column: "is_admin".into(),
        };
        assert_eq!(format!("{err}"), "query cannot select column 'is_admin'");

        let err = BuildError::DisallowedWhereKey { key: "age".into() };
        assert_eq!(format!("{err}"), "where argument 'age' not allowed");

        let err = BuildError::InvalidSortDirection {
            clause: "id goingup".into(),
        };
        assert!(format!("{err}").contains("id goingup"));

        let err = BuildError::InvalidPage { page: 0 };
        assert_eq!(format!("{err}"), "invalid page: 0");
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(BuildError::SearchDisallowed);
        assert_eq!(err.to_string(), "search term is disallowed by config");
    }
}
