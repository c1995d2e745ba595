use serde::Serialize;
use serde_json::Value;

use super::DataApiError;

/// An opaque filter condition passed through to the remote query engine.
///
/// The client does not interpret constraints; the `key`, `constraint_type`,
/// and `value` triple is forwarded verbatim inside the JSON-encoded
/// `constraints` query parameter. See the Bubble Data API documentation for
/// the constraint types the service accepts (`equals`, `text contains`,
/// `greater than`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    /// The field the constraint applies to.
    pub key: String,
    /// The remote comparison operator, e.g. `equals`.
    pub constraint_type: String,
    /// The comparison operand.
    pub value: Value,
}

impl Constraint {
    /// Creates a constraint triple.
    pub fn new(
        key: impl Into<String>,
        constraint_type: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            key: key.into(),
            constraint_type: constraint_type.into(),
            value: value.into(),
        }
    }
}

/// Sort order for a search: a field name and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// The field to sort on.
    pub sort_field: String,
    /// Whether to sort in descending order.
    pub descending: bool,
}

impl SortOrder {
    /// Ascending sort on the given field.
    pub fn ascending(sort_field: impl Into<String>) -> Self {
        Self {
            sort_field: sort_field.into(),
            descending: false,
        }
    }

    /// Descending sort on the given field.
    pub fn descending(sort_field: impl Into<String>) -> Self {
        Self {
            sort_field: sort_field.into(),
            descending: true,
        }
    }
}

/// Query parameters for [`search`](super::DataApiClient::search) and the
/// other listing operations.
///
/// Constructed per call and discarded after; the default query matches every
/// record of the type with no ordering, starting at the first page.
///
/// # Example
///
/// ```rust
/// use bubble_data::{Constraint, SearchQuery, SortOrder};
///
/// let query = SearchQuery::new()
///     .with_constraint(Constraint::new("status", "equals", "open"))
///     .with_sort(SortOrder::descending("Created Date"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Filter constraints; empty matches everything.
    pub constraints: Vec<Constraint>,
    /// Optional sort order; the server's default order applies when absent.
    pub sort: Option<SortOrder>,
    /// Zero-based page offset; the first page when absent.
    pub cursor: Option<u64>,
}

impl SearchQuery {
    /// Creates an empty query matching every record of the type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the page cursor.
    #[must_use]
    pub fn with_cursor(mut self, cursor: u64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Renders the query as `(name, value)` pairs for the request URL.
    ///
    /// `constraints` is always sent (as a JSON-encoded array, `[]` when
    /// empty); `sort_field`/`descending` and `cursor` are omitted when unset.
    /// `descending` travels as the text `"true"`/`"false"` since a query
    /// string cannot carry a bare boolean.
    pub(crate) fn to_query_pairs(&self) -> Result<Vec<(&'static str, String)>, DataApiError> {
        let mut pairs = Vec::with_capacity(4);
        pairs.push(("constraints", serde_json::to_string(&self.constraints)?));

        if let Some(sort) = &self.sort {
            pairs.push(("sort_field", sort.sort_field.clone()));
            let descending = if sort.descending { "true" } else { "false" };
            pairs.push(("descending", descending.to_string()));
        }

        if let Some(cursor) = self.cursor {
            pairs.push(("cursor", cursor.to_string()));
        }

        Ok(pairs)
    }

    /// Renders the query as an URL-encoded query string.
    pub(crate) fn to_query_string(&self) -> Result<String, DataApiError> {
        let pairs = self.to_query_pairs()?;
        Ok(serde_urlencoded::to_string(pairs)?)
    }
}
