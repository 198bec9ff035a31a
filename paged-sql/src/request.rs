//! Untrusted per-call query request.

/// A positional bind value for a WHERE placeholder.
///
/// `Null` stands in for "nullable bind" - build a `Value` from an
/// `Option` and `None` becomes `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean bind.
    Bool(bool),
    /// Integer bind.
    Int(i64),
    /// Floating-point bind.
    Float(f64),
    /// Text bind.
    String(String),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Self::Int(i64::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

/// A query request, as sent by an untrusted API consumer.
///
/// Every field is validated against the [`Policy`](crate::Policy) whitelist
/// when the query is built; nothing here is trusted. Requests are consumed
/// once - callers paging through results bump [`page`](Self::page) and
/// resubmit a fresh request.
///
/// # Example
///
/// ```
/// use paged_sql::Request;
///
/// let request = Request::new()
///     .select(&["name", "age"])
///     .where_arg("age", 21)
///     .order_by(&["name asc"])
///     .page(1);
/// assert_eq!(request.page, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    /// Columns to select. Empty means "all selectable columns".
    pub select: Vec<String>,
    /// Filter key / bind value pairs, matched against the policy's where
    /// clauses. Raw keys are kept as sent so normalization collisions can
    /// be detected and rejected.
    pub where_args: Vec<(String, Value)>,
    /// Rows per page. Zero means "use the policy default".
    pub page_size: u16,
    /// 1-based page number.
    pub page: u32,
    /// `"<column> [asc|desc]"` ordering tokens, applied in request order.
    pub order_by: Vec<String>,
    /// Free-text search term, fanned out across every LIKE-typed filter.
    /// Empty means no search.
    pub search: String,
}

impl Request {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the columns to select.
    #[must_use]
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.select = columns.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Add a filter argument for one of the policy's where clauses.
    #[must_use]
    pub fn where_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_args.push((key.into(), value.into()));
        self
    }

    /// Set the requested page size. Zero keeps the policy default.
    #[must_use]
    pub fn page_size(mut self, page_size: u16) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the 1-based page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the ordering tokens.
    #[must_use]
    pub fn order_by(mut self, clauses: &[&str]) -> Self {
        self.order_by = clauses.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set the free-text search term.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }
}
