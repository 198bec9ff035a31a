//! Query construction pipeline: clause validation, WHERE assembly, and
//! the orchestrating [`build`] entry point.

mod bound;
mod order;
mod select;
mod where_clause;

pub use bound::BoundQuery;
pub(crate) use where_clause::is_like_fragment;

use crate::error::BuildError;
use crate::pagination::resolve_page;
use crate::policy::Policy;
use crate::request::Request;

/// Build a bounded query description from an untrusted request.
///
/// Runs the fixed validation sequence - SELECT, WHERE (with search),
/// ORDER BY, page arithmetic - short-circuiting on the first error, then
/// applies the policy's extension hook (if any) and attaches LIMIT and
/// OFFSET. On error nothing is emitted; there is no partially built query.
///
/// # Example
///
/// ```
/// use paged_sql::{Policy, Request, build};
///
/// let policy = Policy::new()
///     .where_clause("age", "> ?")
///     .orderable_cols(&["name"])
///     .default_page_size(3);
/// let request = Request::new()
///     .where_arg("age", 21)
///     .order_by(&["name asc"])
///     .page(1);
///
/// let query = build(&policy, &request).unwrap();
/// assert_eq!(query.where_clause.as_deref(), Some("age > ?"));
/// assert_eq!(query.order_by.as_deref(), Some("name asc"));
/// assert_eq!(query.limit, 3);
/// assert_eq!(query.offset, 0);
/// ```
pub fn build(policy: &Policy, request: &Request) -> Result<BoundQuery, BuildError> {
    let select = select::select_clause(policy, request)?;
    let (where_body, args) = where_clause::where_clause(policy, request)?;
    let order_by = order::order_clause(policy, request)?;
    let (limit, offset) = resolve_page(policy, request)?;

    let mut query = BoundQuery {
        select,
        where_clause: where_body,
        args,
        order_by,
        limit: 0,
        offset: 0,
    };
    if let Some(hook) = &policy.filter_hook {
        query = hook(query, request);
    }
    query.limit = limit;
    query.offset = offset;
    Ok(query)
}
