use serde::{Deserialize, Serialize};

/// Free-text search as typed by the user, with its case fold computed once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty term imposes no constraint.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive substring match against a single field.
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.folded)
    }

    /// Matches when any of the designated fields contains the term.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        fields.into_iter().any(|field| self.matches(field))
    }
}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.raw
    }
}

/// Entity types that designate which of their fields free-text search looks at.
pub trait Searchable {
    fn matches_search(&self, term: &SearchTerm) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_and_position() {
        let term = SearchTerm::new("ALIC");
        assert!(term.matches("Alice Smith"));
        assert!(term.matches("Bob Alicee"));
        assert!(!term.matches("Carol Jones"));
    }

    #[test]
    fn any_field_is_enough() {
        let term = SearchTerm::new("engineer");
        assert!(term.matches_any(["Dana", "dana@example.com", "Staff Engineer"]));
        assert!(!term.matches_any(["Dana", "dana@example.com", "Designer"]));
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let term = SearchTerm::new(" ");
        assert!(!term.is_empty());
        assert!(term.matches("Alice Smith"));
        assert!(!term.matches("Alice"));
    }
}
