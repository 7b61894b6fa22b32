//! Similar-name suggestions for unknown queries.

use crate::domain::MAX_SUGGESTIONS;
use crate::registry::NameRegistry;

/// Known names containing the part of `query` before its first `.`.
///
/// Matching is case-insensitive. `"sales.ordrs"` looks for `"sales"`, so
/// it proposes the other tables of the same schema. Names are scanned in
/// key order and the first [`MAX_SUGGESTIONS`] matches are returned.
pub(super) fn similar_names(registry: &NameRegistry, query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let needle = lowered
        .split_once('.')
        .map_or(lowered.as_str(), |(head, _)| head);

    registry
        .display_names()
        .filter(|name| name.to_lowercase().contains(needle))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> NameRegistry {
        let mut registry = NameRegistry::new();
        for name in names {
            registry.register(name);
        }
        registry
    }

    #[test]
    fn matches_on_schema_prefix() {
        let registry = registry(&["SALES.ORDERS", "SALES.LINES", "REF.CUSTOMERS"]);

        let found = similar_names(&registry, "sales.missing");

        assert_eq!(found, vec!["SALES.LINES", "SALES.ORDERS"]);
    }

    #[test]
    fn whole_query_used_without_dot() {
        let registry = registry(&["SALES.ORDERS", "REF.ORDERS_ARCHIVE"]);

        let found = similar_names(&registry, "Orders");

        assert_eq!(found, vec!["REF.ORDERS_ARCHIVE", "SALES.ORDERS"]);
    }

    #[test]
    fn capped_at_five() {
        let registry = registry(&["s.a", "s.b", "s.c", "s.d", "s.e", "s.f", "s.g"]);

        let found = similar_names(&registry, "s.zzz");

        assert_eq!(found, vec!["s.a", "s.b", "s.c", "s.d", "s.e"]);
    }

    #[test]
    fn no_match_is_empty() {
        let registry = registry(&["SALES.ORDERS"]);
        assert!(similar_names(&registry, "hr.staff").is_empty());
    }

    #[test]
    fn leading_dot_matches_everything() {
        let registry = registry(&["x.a", "y.b"]);
        assert_eq!(similar_names(&registry, ".whatever").len(), 2);
    }
}
