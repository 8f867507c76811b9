//! Live species search suggestions
//!
//! Maintains a query string and an immutable catalog of species display
//! names, recomputing the match set synchronously on every query change.
//!
//! Matching policy: case-insensitive substring containment, catalog order
//! preserved, capped to [`MAX_MATCHES`] results. The policy is applied
//! uniformly on every page. An empty query always yields an empty match
//! set, never the whole catalog.

/// Upper bound on the number of suggestions shown at once
pub const MAX_MATCHES: usize = 10;

/// Species search component
#[derive(Debug, Clone)]
pub struct SpeciesMatcher {
    /// Reference catalog, immutable after load
    catalog: Vec<String>,
    query: String,
    /// Current match set, recomputed on every query change
    matches: Vec<String>,
}

impl SpeciesMatcher {
    /// Create a matcher over a loaded catalog. Catalog entries are
    /// assumed unique; no deduplication is performed.
    pub fn new(catalog: Vec<String>) -> Self {
        Self {
            catalog,
            query: String::new(),
            matches: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query and recompute the match set.
    ///
    /// Recompute is a linear scan over the full catalog on every
    /// keystroke. Catalogs are small; this is a known scaling limit.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.matches = self.compute_matches();
    }

    /// Clear the query, emptying the match set
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.matches.clear();
    }

    /// Ordered subsequence of the catalog matching the current query
    pub fn current_matches(&self) -> &[String] {
        &self.matches
    }

    fn compute_matches(&self) -> Vec<String> {
        if self.query.is_empty() {
            return Vec::new();
        }
        let needle = self.query.to_lowercase();
        self.catalog
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(MAX_MATCHES)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SpeciesMatcher {
        SpeciesMatcher::new(vec![
            "American Robin".to_string(),
            "European Robin".to_string(),
            "Blue Jay".to_string(),
        ])
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let mut m = matcher();
        m.set_query("robin");
        assert_eq!(
            m.current_matches(),
            &["American Robin".to_string(), "European Robin".to_string()]
        );
    }

    #[test]
    fn empty_query_yields_empty_matches() {
        let mut m = matcher();
        m.set_query("robin");
        m.set_query("");
        assert!(m.current_matches().is_empty());
    }

    #[test]
    fn clear_query_empties_matches() {
        let mut m = matcher();
        m.set_query("jay");
        assert_eq!(m.current_matches().len(), 1);
        m.clear_query();
        assert!(m.current_matches().is_empty());
        assert_eq!(m.query(), "");
    }

    #[test]
    fn matches_preserve_catalog_order() {
        let mut m = SpeciesMatcher::new(vec![
            "Zebra Finch".to_string(),
            "House Finch".to_string(),
            "Purple Finch".to_string(),
        ]);
        m.set_query("finch");
        assert_eq!(
            m.current_matches(),
            &[
                "Zebra Finch".to_string(),
                "House Finch".to_string(),
                "Purple Finch".to_string()
            ]
        );
    }

    #[test]
    fn match_count_is_capped() {
        let catalog: Vec<String> = (0..50).map(|i| format!("Warbler {}", i)).collect();
        let mut m = SpeciesMatcher::new(catalog);
        m.set_query("warbler");
        assert_eq!(m.current_matches().len(), MAX_MATCHES);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let mut m = matcher();
        m.set_query("penguin");
        assert!(m.current_matches().is_empty());
    }
}
