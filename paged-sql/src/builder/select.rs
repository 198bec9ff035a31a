//! SELECT clause validation.

use crate::error::BuildError;
use crate::policy::Policy;
use crate::request::Request;

/// Validate the requested columns and produce the SELECT column list.
///
/// Tokens are trimmed and lower-cased; blank tokens are skipped. With an
/// unrestricted policy any surviving token passes through; otherwise every
/// token must match the whitelist case-insensitively. An empty request
/// falls back to `*` (unrestricted policy) or to every whitelisted column
/// in whitelist order.
pub(crate) fn select_clause(
    policy: &Policy,
    request: &Request,
) -> Result<Option<String>, BuildError> {
    // No selectable columns configured means all columns are allowed, and
    // an empty request then means "select everything".
    if policy.selectable_cols.is_empty() && request.select.is_empty() {
        return Ok(Some("*".to_string()));
    }

    let mut cols: Vec<String> = Vec::new();
    for raw in &request.select {
        let col = raw.trim().to_lowercase();
        if col.is_empty() {
            continue;
        }
        if policy.selectable_cols.is_empty() {
            cols.push(col);
        } else if policy
            .selectable_cols
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&col))
        {
            cols.push(col);
        } else {
            return Err(BuildError::DisallowedSelect { column: col });
        }
    }

    // Nothing survived normalization: select everything that *can* be
    // selected (listing the columns, not "*").
    if cols.is_empty() {
        let all = policy.selectable_cols.join(", ").to_lowercase();
        return Ok(if all.is_empty() { None } else { Some(all) });
    }

    Ok(Some(cols.join(", ")))
}
