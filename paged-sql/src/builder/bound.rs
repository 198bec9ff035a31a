//! Bound query description handed to the execution layer.

use crate::request::Value;

/// The validated, bounded query produced by [`build`](crate::build).
///
/// Holds the clause fragments and the ordered bind arguments; it never
/// executes anything itself. The argument order matches the left-to-right
/// `?` placeholder order across the WHERE fragment, so the description can
/// be fed directly to any positional-parameter driver.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "BoundQuery must be handed to the execution layer"]
pub struct BoundQuery {
    /// SELECT column list, `None` when the caller's default projection
    /// applies.
    pub select: Option<String>,
    /// WHERE clause body (without the `WHERE` keyword), `None` when no
    /// filtering applies.
    pub where_clause: Option<String>,
    /// Bind values, one per `?` in [`where_clause`](Self::where_clause).
    pub args: Vec<Value>,
    /// ORDER BY body (without the `ORDER BY` keywords), `None` when no
    /// ordering applies.
    pub order_by: Option<String>,
    /// Effective rows per page.
    pub limit: u16,
    /// Rows to skip before the first returned row.
    pub offset: u64,
}

impl BoundQuery {
    /// Render the full SELECT statement for the given table, with `?`
    /// placeholders for the bind arguments in [`args`](Self::args).
    ///
    /// The table name comes from trusted code, never from the request.
    ///
    /// # Panics
    ///
    /// Panics if the table name is not a plain SQL identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use paged_sql::{Policy, Request, build};
    ///
    /// let policy = Policy::new().where_clause("age", "> ?");
    /// let request = Request::new().where_arg("age", 21).page(1);
    /// let query = build(&policy, &request).unwrap();
    /// assert_eq!(
    ///     query.to_sql("people"),
    ///     "SELECT * FROM people WHERE age > ? LIMIT 25 OFFSET 0"
    /// );
    /// ```
    #[must_use]
    pub fn to_sql(&self, table: &str) -> String {
        assert_table_name(table);

        let mut sql = String::new();
        sql.push_str(&format!(
            "SELECT {} FROM {}",
            self.select.as_deref().unwrap_or("*"),
            table
        ));
        if let Some(where_clause) = &self.where_clause {
            sql.push_str(&format!(" WHERE {where_clause}"));
        }
        if let Some(order_by) = &self.order_by {
            sql.push_str(&format!(" ORDER BY {order_by}"));
        }
        sql.push_str(&format!(" LIMIT {}", self.limit));
        sql.push_str(&format!(" OFFSET {}", self.offset));
        sql
    }
}

/// The table name is trusted input, but a stray quote or semicolon in it
/// would still end up verbatim in the statement - fail loudly instead.
fn assert_table_name(table: &str) {
    let mut chars = table.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    assert!(
        head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        "invalid table name '{table}': must start with a letter or underscore \
         and contain only ASCII alphanumerics and underscores"
    );
}
