//! WHERE clause assembly: explicit filters plus the search fan-out.

use std::collections::BTreeMap;

use crate::error::BuildError;
use crate::policy::Policy;
use crate::request::{Request, Value};

/// True when a comparison fragment is LIKE-typed, i.e. eligible for the
/// search fan-out and wildcard patching. One case-insensitive check,
/// shared by both call sites.
pub(crate) fn is_like_fragment(fragment: &str) -> bool {
    fragment.to_lowercase().contains("like")
}

/// Normalize the request's filter keys (trim, lower-case) into the
/// deterministic lexicographic order WHERE assembly relies on.
///
/// Two distinct raw keys collapsing onto one normalized key would make
/// the bound value depend on argument order, so collisions are rejected.
fn canonical_args(request: &Request) -> Result<BTreeMap<String, Value>, BuildError> {
    let mut args = BTreeMap::new();
    for (raw, value) in &request.where_args {
        let key = raw.trim().to_lowercase();
        if args.insert(key.clone(), value.clone()).is_some() {
            return Err(BuildError::AmbiguousWhereKey { key });
        }
    }
    Ok(args)
}

/// Assemble the WHERE body and its ordered bind arguments.
///
/// Explicit filters form an AND-group in sorted key order; a search term
/// fans out across every LIKE-typed policy filter as an OR-group, bound
/// once per member. When both groups are present the result is
/// `"<AND-group> AND (<OR-group>)"`. Argument order is AND values then OR
/// values, matching the placeholder order in the fragment.
pub(crate) fn where_clause(
    policy: &Policy,
    request: &Request,
) -> Result<(Option<String>, Vec<Value>), BuildError> {
    if policy.disallow_search && !request.search.is_empty() {
        return Err(BuildError::SearchDisallowed);
    }

    let mut fragments: Vec<String> = Vec::new();
    let mut args: Vec<Value> = Vec::new();

    // Request keys not declared by the policy are rejected, never dropped.
    for (key, value) in canonical_args(request)? {
        let Some(template) = policy.where_clauses.get(&key) else {
            return Err(BuildError::DisallowedWhereKey { key });
        };
        fragments.push(format!("{key} {template}"));
        args.push(value);
    }
    let and_group = fragments.join(" AND ");

    // If there is no search term, we're done.
    if request.search.is_empty() {
        return Ok((none_if_empty(and_group), args));
    }

    // The search term applies to every LIKE-typed filter, bound once per
    // clause. BTreeMap iteration keeps the OR-group in sorted key order.
    let mut or_parts: Vec<String> = Vec::new();
    for (key, template) in &policy.where_clauses {
        if is_like_fragment(template) {
            or_parts.push(format!("{key} {template}"));
            args.push(Value::String(request.search.clone()));
        }
    }
    let or_group = or_parts.join(" OR ");

    let clause = match (and_group.is_empty(), or_group.is_empty()) {
        (false, false) => format!("{and_group} AND ({or_group})"),
        (true, false) => or_group,
        (false, true) => and_group,
        (true, true) => String::new(),
    };
    Ok((none_if_empty(clause), args))
}

fn none_if_empty(clause: String) -> Option<String> {
    if clause.is_empty() { None } else { Some(clause) }
}
