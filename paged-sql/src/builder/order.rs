//! ORDER BY clause validation.

use crate::error::BuildError;
use crate::policy::Policy;
use crate::request::Request;

/// Validate the ordering tokens and produce the ORDER BY body.
///
/// Each token is trimmed, lower-cased, and split into column and optional
/// direction. Blank tokens are skipped; anything else must name a
/// whitelisted column and, if a direction is present, use `asc` or `desc`.
/// Accepted tokens are joined in request order - there is no fallback to
/// the whitelist and no de-duplication.
pub(crate) fn order_clause(
    policy: &Policy,
    request: &Request,
) -> Result<Option<String>, BuildError> {
    let mut parts: Vec<String> = Vec::new();
    for raw in &request.order_by {
        let token = raw.trim().to_lowercase();
        let fields: Vec<&str> = token.split(' ').collect();
        if fields[0].is_empty() {
            // Blank order-by token. Nothing to do.
            continue;
        }
        if fields.len() > 2 {
            return Err(BuildError::InvalidOrderBy { clause: raw.clone() });
        }
        if fields.len() == 2 && fields[1] != "asc" && fields[1] != "desc" {
            return Err(BuildError::InvalidSortDirection { clause: raw.clone() });
        }
        if policy.orderable_cols.is_empty() {
            return Err(BuildError::NoOrderableColumns);
        }
        if policy
            .orderable_cols
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(fields[0]))
        {
            parts.push(token);
        } else {
            return Err(BuildError::DisallowedOrderBy { clause: raw.clone() });
        }
    }

    Ok(if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_normalized_in_request_order() {
        let policy = Policy::new().orderable_cols(&["id", "date"]);
        let request = Request::new().order_by(&["ID ASC", "dAte"]);
        let clause = order_clause(&policy, &request).unwrap();
        assert_eq!(clause.as_deref(), Some("id asc, date"));
    }

    #[test]
    fn test_blank_tokens_skipped() {
        let policy = Policy::new().orderable_cols(&["ID", "date"]);
        let request = Request::new().order_by(&[" ID desc  ", ""]);
        let clause = order_clause(&policy, &request).unwrap();
        assert_eq!(clause.as_deref(), Some("id desc"));
    }

    #[test]
    fn test_invalid_direction() {
        let policy = Policy::new().orderable_cols(&["ID", "date"]);
        let request = Request::new().order_by(&[" ID goingup  "]);
        assert_eq!(
            order_clause(&policy, &request),
            Err(BuildError::InvalidSortDirection {
                clause: " ID goingup  ".to_string()
            })
        );
    }

    #[test]
    fn test_column_outside_whitelist() {
        let policy = Policy::new().orderable_cols(&["ID", "date"]);
        let request = Request::new().order_by(&["user_id"]);
        assert_eq!(
            order_clause(&policy, &request),
            Err(BuildError::DisallowedOrderBy {
                clause: "user_id".to_string()
            })
        );
    }

    #[test]
    fn test_too_many_fields() {
        let policy = Policy::new().orderable_cols(&["ID", "date"]);
        let request = Request::new().order_by(&["id asc desc"]);
        assert_eq!(
            order_clause(&policy, &request),
            Err(BuildError::InvalidOrderBy {
                clause: "id asc desc".to_string()
            })
        );
    }

    #[test]
    fn test_no_orderable_columns_configured() {
        let request = Request::new().order_by(&["id"]);
        assert_eq!(
            order_clause(&Policy::new(), &request),
            Err(BuildError::NoOrderableColumns)
        );
    }

    #[test]
    fn test_empty_request_yields_no_ordering() {
        let policy = Policy::new().orderable_cols(&["id"]);
        let clause = order_clause(&policy, &Request::new()).unwrap();
        assert_eq!(clause, None);
    }

    #[test]
    fn test_repeated_columns_pass_through() {
        let policy = Policy::new().orderable_cols(&["id"]);
        let request = Request::new().order_by(&["id asc", "id desc"]);
        let clause = order_clause(&policy, &request).unwrap();
        assert_eq!(clause.as_deref(), Some("id asc, id desc"));
    }
}
