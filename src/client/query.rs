//! Query parameters for the repository search endpoint

/// Default number of items per page
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Sort order for search requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending order (fewest stars, oldest first)
    Asc,
    /// Descending order (most stars, newest first)
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters for one page of `GET /search/repositories`.
///
/// Use the builder pattern to configure optional parts.
///
/// # Example
/// ```ignore
/// let params = SearchParams::new("language:rust")
///     .per_page(20)
///     .page(2)
///     .sort("stars");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search expression (`q`)
    pub query: String,
    /// Items per page
    pub per_page: u32,
    /// 1-indexed page number
    pub page: u32,
    /// Sort field name as the API spells it
    pub sort: Option<String>,
    /// Sort order
    pub order: SortOrder,
}

impl SearchParams {
    /// Create params for a query with first-page defaults.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: DEFAULT_PER_PAGE,
            page: 1,
            sort: None,
            order: SortOrder::default(),
        }
    }

    /// Build the `q` expression for a language listing.
    ///
    /// Languages are joined by a space after a single `language:` qualifier,
    /// e.g. `language:python rust`.
    pub fn language_query(languages: &[String]) -> String {
        format!("language:{}", languages.join(" "))
    }

    /// Build the `q` expression for a free-text search with an optional
    /// language qualifier appended.
    pub fn text_query(words: &[String], language: Option<&str>) -> String {
        let mut query = words.join(" ");
        if let Some(lang) = language {
            query.push_str(" language:");
            query.push_str(lang);
        }
        query
    }

    /// Set the page size.
    pub fn per_page(mut self, size: u32) -> Self {
        self.per_page = size;
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the sort field.
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Convert to query string parameters.
    ///
    /// Always emitted in the order `per_page`, `page`, `order`, `sort`, `q`;
    /// `sort` is omitted when unset so GitHub falls back to best match.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("order", self.order.as_str().to_string()),
        ];

        if let Some(ref field) = self.sort {
            params.push(("sort", field.clone()));
        }

        params.push(("q", self.query.clone()));
        params
    }
}
