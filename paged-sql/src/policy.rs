//! Server-authored query policy.

use std::collections::BTreeMap;
use std::fmt;

use crate::builder::BoundQuery;
use crate::request::Request;

/// Page size used when the policy does not set one.
pub const DEFAULT_PAGE_SIZE: u16 = 25;

/// Upper page-size bound used when the policy does not set one.
pub const MAX_PAGE_SIZE: u16 = 1000;

/// Policy extension hook, applied after WHERE and ORDER BY are bound but
/// before LIMIT/OFFSET are attached.
///
/// An escape hatch for per-endpoint constraints the whitelist cannot
/// express. The hook receives the partially bound query and the original
/// request and returns the query to continue with.
pub type FilterHook = Box<dyn Fn(BoundQuery, &Request) -> BoundQuery + Send + Sync>;

/// Whitelist policy governing what a [`Request`] may select, filter,
/// order by, and how many rows it may fetch per page.
///
/// A policy is built once per endpoint and shared across requests. Page
/// size defaults are resolved at construction (zero becomes
/// [`DEFAULT_PAGE_SIZE`] / [`MAX_PAGE_SIZE`]), so a finished policy is
/// immutable and safe to share between threads.
///
/// # Example
///
/// ```
/// use paged_sql::Policy;
///
/// let policy = Policy::new()
///     .selectable_cols(&["id", "name", "age"])
///     .where_clause("age", "> ?")
///     .where_clause("name", "like ?")
///     .orderable_cols(&["name"])
///     .default_page_size(25);
/// ```
pub struct Policy {
    /// Columns that may be selected. Empty means unrestricted.
    pub(crate) selectable_cols: Vec<String>,
    /// Normalized filter key to SQL comparison fragment, e.g.
    /// `"age" => "> ?"`. Defines the legal filter keys and their
    /// operators; BTreeMap iteration gives the deterministic key order
    /// the argument-binding contract relies on.
    pub(crate) where_clauses: BTreeMap<String, String>,
    /// Columns that may be ordered by. Empty means ordering is disabled.
    pub(crate) orderable_cols: Vec<String>,
    pub(crate) default_page_size: u16,
    pub(crate) max_page_size: u16,
    pub(crate) disallow_search: bool,
    pub(crate) filter_hook: Option<FilterHook>,
}

impl Policy {
    /// Create a policy with no whitelists and the built-in page sizes.
    ///
    /// With no further configuration this allows selecting anything,
    /// filtering by nothing, and ordering by nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selectable_cols: Vec::new(),
            where_clauses: BTreeMap::new(),
            orderable_cols: Vec::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            disallow_search: false,
            filter_hook: None,
        }
    }

    /// Restrict which columns may be selected. Empty means unrestricted.
    #[must_use]
    pub fn selectable_cols(mut self, columns: &[&str]) -> Self {
        self.selectable_cols = columns.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Declare a filter key and its SQL comparison fragment.
    ///
    /// The fragment is the operator half of the comparison, with `?` as
    /// the bind placeholder: `"> ?"`, `"= ?"`, `"like ?"`. The key is
    /// normalized (trimmed, lower-cased) so it matches request keys after
    /// their own normalization.
    #[must_use]
    pub fn where_clause(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        let key = key.into().trim().to_lowercase();
        self.where_clauses.insert(key, fragment.into());
        self
    }

    /// Restrict which columns may be ordered by. Empty disables ordering.
    #[must_use]
    pub fn orderable_cols(mut self, columns: &[&str]) -> Self {
        self.orderable_cols = columns.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set the page size used when a request does not ask for one.
    /// Zero restores [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn default_page_size(mut self, size: u16) -> Self {
        self.default_page_size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
        self
    }

    /// Set the maximum page size a request may ask for.
    /// Zero restores [`MAX_PAGE_SIZE`].
    #[must_use]
    pub fn max_page_size(mut self, size: u16) -> Self {
        self.max_page_size = if size == 0 { MAX_PAGE_SIZE } else { size };
        self
    }

    /// Reject any request that carries a search term.
    #[must_use]
    pub fn disallow_search(mut self) -> Self {
        self.disallow_search = true;
        self
    }

    /// Install an extension hook, run after WHERE/ORDER BY are bound and
    /// before LIMIT/OFFSET are attached.
    #[must_use]
    pub fn filter_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(BoundQuery, &Request) -> BoundQuery + Send + Sync + 'static,
    {
        self.filter_hook = Some(Box::new(hook));
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("selectable_cols", &self.selectable_cols)
            .field("where_clauses", &self.where_clauses)
            .field("orderable_cols", &self.orderable_cols)
            .field("default_page_size", &self.default_page_size)
            .field("max_page_size", &self.max_page_size)
            .field("disallow_search", &self.disallow_search)
            .field("filter_hook", &self.filter_hook.as_ref().map(|_| ".."))
            .finish()
    }
}
