//! Search term value object.

use std::fmt;

/// Raw search text entered by a shopper.
///
/// An empty value is meaningful: it means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    value: String,
}

impl SearchQuery {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The query exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Checks whether the query reads the same in both directions.
    ///
    /// Case, whitespace and punctuation are ignored: the value is lowercased
    /// and reduced to ASCII letters and digits before comparing. Blank
    /// queries and queries with fewer than two significant characters are
    /// never palindromes.
    pub fn is_palindrome(&self) -> bool {
        if self.value.trim().is_empty() {
            return false;
        }

        let normalized: Vec<u8> = self
            .value
            .to_lowercase()
            .bytes()
            .filter(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            .collect();

        if normalized.len() < 2 {
            return false;
        }

        normalized.iter().eq(normalized.iter().rev())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
