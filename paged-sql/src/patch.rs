//! Wildcard patching for LIKE-typed filter values.

use crate::builder::is_like_fragment;
use crate::policy::Policy;
use crate::request::{Request, Value};

/// The SQL LIKE "any substring" marker.
const WILDCARD: char = '%';

/// Surround LIKE-bound values in the request with `%` wildcards.
///
/// A where-arg is patched when its value is textual, its normalized key
/// maps to a LIKE-typed policy filter, and the value does not already
/// contain a wildcard anywhere. The search term is patched under the same
/// already-contains-wildcard guard whenever it is non-empty. Values that
/// are not strings, or that already carry a wildcard, are left untouched,
/// which makes the call idempotent. The policy is only read, never
/// changed.
///
/// # Example
///
/// ```
/// use paged_sql::{patch_like_query, Policy, Request, Value};
///
/// let policy = Policy::new().where_clause("name", "like ?");
/// let mut request = Request::new().where_arg("name", "bob").search("yodda");
/// patch_like_query(&policy, &mut request, true, true);
/// assert_eq!(request.where_args[0].1, Value::String("%bob%".to_string()));
/// assert_eq!(request.search, "%yodda%");
/// ```
pub fn patch_like_query(
    policy: &Policy,
    request: &mut Request,
    prepend_wildcard: bool,
    append_wildcard: bool,
) {
    for (raw_key, value) in &mut request.where_args {
        let key = raw_key.trim().to_lowercase();
        let like_typed = policy
            .where_clauses
            .get(&key)
            .is_some_and(|fragment| is_like_fragment(fragment));
        if !like_typed {
            continue;
        }
        if let Value::String(text) = value {
            patch_value(text, prepend_wildcard, append_wildcard);
        }
    }

    if !request.search.is_empty() {
        patch_value(&mut request.search, prepend_wildcard, append_wildcard);
    }
}

fn patch_value(text: &mut String, prepend_wildcard: bool, append_wildcard: bool) {
    if text.contains(WILDCARD) {
        return;
    }
    if prepend_wildcard {
        text.insert(0, WILDCARD);
    }
    if append_wildcard {
        text.push(WILDCARD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> Policy {
        Policy::new()
            .where_clause("name", "like ?")
            .where_clause("id", "= ?")
    }

    fn request() -> Request {
        Request::new()
            .where_arg("name", "bob")
            .where_arg("id", 38)
            .where_arg("bogus", "blah")
            .search("yodda")
    }

    fn arg<'a>(request: &'a Request, key: &str) -> &'a Value {
        &request
            .where_args
            .iter()
            .find(|(k, _)| k == key)
            .expect("arg present")
            .1
    }

    #[test]
    fn test_prepend_only() {
        let mut req = request();
        patch_like_query(&policy(), &mut req, true, false);

        // No field was added or removed.
        assert_eq!(req.where_args.len(), 3);
        assert_eq!(arg(&req, "name"), &Value::String("%bob".to_string()));
        // Not patched (no matching like clause).
        assert_eq!(arg(&req, "bogus"), &Value::String("blah".to_string()));
        // Not patched (not a string).
        assert_eq!(arg(&req, "id"), &Value::Int(38));
        // Search is always patched.
        assert_eq!(req.search, "%yodda");
    }

    #[test]
    fn test_append_only() {
        let mut req = request();
        patch_like_query(&policy(), &mut req, false, true);

        assert_eq!(arg(&req, "name"), &Value::String("bob%".to_string()));
        assert_eq!(arg(&req, "bogus"), &Value::String("blah".to_string()));
        assert_eq!(arg(&req, "id"), &Value::Int(38));
        assert_eq!(req.search, "yodda%");
    }

    #[test]
    fn test_idempotent() {
        let mut req = request();
        patch_like_query(&policy(), &mut req, false, true);
        // Calling it again does not add extra wildcards.
        patch_like_query(&policy(), &mut req, true, true);

        assert_eq!(arg(&req, "name"), &Value::String("bob%".to_string()));
        assert_eq!(req.search, "yodda%");
    }

    #[test]
    fn test_value_with_wildcard_anywhere_is_untouched() {
        let mut req = Request::new().where_arg("name", "b%b");
        patch_like_query(&policy(), &mut req, true, true);
        assert_eq!(arg(&req, "name"), &Value::String("b%b".to_string()));
    }

    #[test]
    fn test_raw_key_is_normalized_before_matching() {
        let mut req = Request::new().where_arg(" NAME ", "bob");
        patch_like_query(&policy(), &mut req, true, true);
        assert_eq!(arg(&req, " NAME "), &Value::String("%bob%".to_string()));
    }

    #[test]
    fn test_empty_search_stays_empty() {
        let mut req = Request::new().where_arg("id", 1);
        patch_like_query(&policy(), &mut req, true, true);
        assert_eq!(req.search, "");
    }
}
