//! Ordered query-string parameters with `URLSearchParams`-like semantics.

use super::sorting::SortState;
use std::fmt;
use url::form_urlencoded;

pub const SORT_KEY: &str = "sort";
pub const ORDER_KEY: &str = "order";

/// Ordered list of decoded `key=value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string with or without the leading `?`.
    ///
    /// Decoding is `application/x-www-form-urlencoded`: `+` is a space and
    /// invalid UTF-8 after percent-decoding becomes U+FFFD.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first `key` in place and drop its duplicates, or append
    /// when the key is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Overwrite `sort` and `order`, keeping every other parameter.
    pub fn with_sort(mut self, sort: &SortState) -> Self {
        self.set(SORT_KEY, sort.field.as_str());
        self.set(ORDER_KEY, sort.direction.as_str());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `path?query`, or just `path` when there are no parameters
    pub fn to_url(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self)
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish();
        f.write_str(&query)
    }
}
