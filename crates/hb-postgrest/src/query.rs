//! Projection and filter building for store queries.
//!
//! PostgREST encodes filters as `column=op.value` query parameters and
//! embedded-resource projections inside the `select` parameter, e.g.
//! `select=*, company:companies(name,logo_url), saved:saved_jobs(id)`.

/// A single row filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: String,
    predicate: String,
}

impl Filter {
    /// Equality filter: `column=eq.value`.
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self {
            column: column.into(),
            predicate: format!("eq.{}", value.to_string()),
        }
    }

    /// Case-insensitive pattern filter: `column=ilike.pattern`. The pattern
    /// uses `%` wildcards.
    pub fn ilike(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            predicate: format!("ilike.{}", pattern.into()),
        }
    }

    /// Render as a query-string pair.
    pub fn to_param(&self) -> (String, String) {
        (self.column.clone(), self.predicate.clone())
    }
}

/// A select projection plus its filters.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    select: String,
    filters: Vec<Filter>,
}

impl SelectQuery {
    /// Query with an explicit projection string.
    pub fn new(select: impl Into<String>) -> Self {
        Self {
            select: select.into(),
            filters: Vec::new(),
        }
    }

    /// Query selecting all columns.
    pub fn all() -> Self {
        Self::new("*")
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    pub fn ilike(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filters.push(Filter::ilike(column, pattern));
        self
    }

    /// Render as query-string pairs, `select` first.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.select.clone())];
        params.extend(self.filters.iter().map(Filter::to_param));
        params
    }
}
