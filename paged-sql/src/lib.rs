// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs - extensive doc changes needed
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::missing_panics_doc)] // # Panics sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use
#![allow(clippy::format_push_string)] // String building style preference
// Internal builder code where bounds are checked before use
#![allow(clippy::indexing_slicing)] // Bounds checked before indexing in clause logic

//! # paged-sql - Whitelist-driven search, filtering and pagination
//!
//! Turns an untrusted query request - selected columns, filter arguments,
//! sort order, free-text search, page number - into a safe, bounded SQL
//! query description under a server-defined whitelist [`Policy`]. The
//! crate produces clause fragments and an ordered bind-argument list; it
//! never executes SQL and never trusts the request.
//!
//! ## Quick Start
//!
//! ```
//! use paged_sql::prelude::*;
//!
//! // Per-endpoint policy: what callers may filter and order by.
//! let policy = Policy::new()
//!     .where_clause("age", "> ?")
//!     .orderable_cols(&["name"])
//!     .default_page_size(3);
//!
//! // Per-call request, straight from user input.
//! let request = Request::new()
//!     .where_arg("age", 21)
//!     .order_by(&["name asc"])
//!     .page(1);
//!
//! let query = build(&policy, &request).unwrap();
//! assert_eq!(query.where_clause.as_deref(), Some("age > ?"));
//! assert_eq!(query.args, vec![Value::Int(21)]);
//! assert_eq!(query.to_sql("people"),
//!     "SELECT * FROM people WHERE age > ? ORDER BY name asc LIMIT 3 OFFSET 0");
//! ```
//!
//! ## Search
//!
//! A request's search term fans out across every LIKE-typed filter the
//! policy declares, OR-ed together and AND-ed with the explicit filters:
//!
//! ```
//! use paged_sql::prelude::*;
//!
//! let policy = Policy::new()
//!     .where_clause("first_name", "like ?")
//!     .where_clause("last_name", "like ?")
//!     .where_clause("age", "> ?");
//!
//! let mut request = Request::new().where_arg("age", 30).page(1).search("augustus");
//! patch_like_query(&policy, &mut request, true, true);
//!
//! let query = build(&policy, &request).unwrap();
//! assert_eq!(
//!     query.where_clause.as_deref(),
//!     Some("age > ? AND (first_name like ? OR last_name like ?)")
//! );
//! assert_eq!(query.args[1], Value::String("%augustus%".to_string()));
//! ```
//!
//! ## What the caller cannot do
//!
//! Requests that name a column or filter key outside the policy, order by
//! anything not whitelisted, send a malformed ordering token, search when
//! searching is disallowed, or ask for page zero all fail with a
//! [`BuildError`] naming the offending token - they are never silently
//! corrected. Page sizes above the policy maximum are the one exception:
//! they clamp instead of failing.

mod builder;
mod error;
mod form;
mod pagination;
mod patch;
mod policy;
mod request;

pub use builder::{BoundQuery, build};
pub use error::BuildError;
pub use form::FormError;
pub use pagination::PageInfo;
pub use patch::patch_like_query;
pub use policy::{DEFAULT_PAGE_SIZE, FilterHook, MAX_PAGE_SIZE, Policy};
pub use request::{Request, Value};

/// Re-export miniserde's json module for runtime request parsing.
///
/// Use this to parse JSON payloads into values for
/// [`Request::from_json`].
///
/// # Example
///
/// ```
/// use paged_sql::{json, Request};
///
/// let value: miniserde::json::Value = json::from_str(r#"{"Page": 1}"#).unwrap();
/// let request = Request::from_json(&value).unwrap();
/// assert_eq!(request.page, 1);
/// ```
pub use miniserde::json;

/// Prelude module for convenient imports.
///
/// ```
/// use paged_sql::prelude::*;
///
/// let query = build(&Policy::new(), &Request::new().page(1)).unwrap();
/// assert_eq!(query.limit, 25);
/// ```
pub mod prelude {
    pub use crate::{
        BoundQuery, BuildError, FormError, PageInfo, Policy, Request, Value, build, json,
        patch_like_query,
    };
}


// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
