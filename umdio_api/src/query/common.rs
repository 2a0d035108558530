//! Shared query infrastructure: the [`Query`] trait, [`QueryOptions`], and the
//! query-string builder.

/// Trait implemented by the paged listing queries. Provides the option
/// serialization and shared builder methods for page and sort.
pub trait Query {
    /// Returns the explicit filters of this query, in wire order.
    fn to_options(&self) -> QueryOptions;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed). Values below 1 leave `page` off the wire.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the sort expression, e.g. `"course_id,-credits"`.
    fn with_sort(mut self, sort: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort = sort.to_string();
        self
    }
}

/// Fields shared by the paged queries.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Sort expression. Empty uses the API default.
    pub sort: String,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            sort: String::new(),
        }
    }
}

impl QueryCommon {
    pub fn add_page(&self, options: &mut QueryOptions) {
        if self.page > 0 {
            options.push("page", self.page);
        }
    }

    pub fn add_sort(&self, options: &mut QueryOptions) {
        options.push_non_empty("sort", &self.sort);
    }
}

/// A single query value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
}

impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

/// Ordered key/value options for one request.
///
/// Insertion order is kept and decides the order of the emitted query string.
/// Pushing an existing key overwrites its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<QueryValue>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Pushes `value` unless it [`is_falsy`].
    pub fn push_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !is_falsy(value) {
            self.push(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the options with [`build_query_string`].
    pub fn to_query_string(&self) -> String {
        build_query_string(self)
    }
}

/// True for the argument values that count as "not given": `""` and `"0"`.
pub fn is_falsy(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Renders `options` as `?key=value&key=value`.
///
/// Values are written as-is: nothing is percent-encoded here, so callers
/// encode free text (such as a professor's name) before pushing it. Trailing
/// `&` separators are trimmed.
pub fn build_query_string(options: &QueryOptions) -> String {
    let mut query = String::from("?");
    for (key, value) in options.iter() {
        query.push_str(&format!("{}={}&", key, value));
    }
    query.trim_end_matches('&').to_string()
}
