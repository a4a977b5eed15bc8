//! Alias matching against the technology catalog
//!
//! Maps a set of normalized tokens (dependency names plus detected languages)
//! to catalog entries. An entry matches when any token equals one of its
//! aliases or contains one as a substring. The substring rule is permissive:
//! a token that merely contains "go" will match the Go entry.

use crate::stack::catalog::{Technology, TECHNOLOGIES};

/// Matches tokens against the catalog, returning entries in catalog order
///
/// Tokens are expected to be normalized (lowercased, trimmed). The result is
/// order-stable: it depends only on which entries matched, never on token
/// order, and running the matcher twice on the same tokens yields the same
/// sequence.
pub fn match_technologies(tokens: &[String]) -> Vec<&'static Technology> {
    TECHNOLOGIES
        .iter()
        .filter(|tech| {
            tokens.iter().any(|token| {
                std::iter::once(tech.id)
                    .chain(tech.aliases.iter().copied())
                    .any(|alias| token == alias || token.contains(alias))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_exact_id_match() {
        let result = match_technologies(&tokens(&["flask"]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "flask");
    }

    #[test]
    fn test_substring_rule_is_permissive() {
        // "django" contains "go", so both entries match
        let result = match_technologies(&tokens(&["django"]));
        let ids: Vec<&str> = result.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["django", "go"]);
    }

    #[test]
    fn test_alias_match() {
        let result = match_technologies(&tokens(&["golang"]));
        assert!(result.iter().any(|t| t.id == "go"));
    }

    #[test]
    fn test_substring_match() {
        // "react-router" contains the alias-set entry "react"
        let result = match_technologies(&tokens(&["react-router"]));
        assert!(result.iter().any(|t| t.id == "react"));
    }

    #[test]
    fn test_result_in_catalog_order() {
        // Token order reversed relative to catalog order
        let result = match_technologies(&tokens(&["redis", "python", "typescript"]));
        let ids: Vec<&str> = result.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["typescript", "python", "redis"]);
    }

    #[test]
    fn test_idempotent() {
        let input = tokens(&["flask", "postgres", "node"]);
        let first: Vec<&str> = match_technologies(&input).iter().map(|t| t.id).collect();
        let second: Vec<&str> = match_technologies(&input).iter().map(|t| t.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_match_without_token() {
        // No descriptor appears without a matching token
        let result = match_technologies(&tokens(&["left-pad"]));
        assert!(result.iter().all(|t| t.id != "django"));
    }

    #[test]
    fn test_empty_tokens() {
        assert!(match_technologies(&[]).is_empty());
    }

    #[test]
    fn test_each_entry_appears_once() {
        // Several tokens matching the same entry produce one result entry
        let result = match_technologies(&tokens(&["react", "react-dom"]));
        let react_count = result.iter().filter(|t| t.id == "react").count();
        assert_eq!(react_count, 1);
    }
}
