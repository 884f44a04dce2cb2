//! Ingredient substitution table.
//!
//! Static directional mapping from a canonical ingredient to the substitutes
//! accepted in its place. Data is loaded from `data/substitutions.json` at
//! compile time. The mapping is directional: "turkey" substitutes for
//! "chicken", but not the other way around.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The raw JSON structure for the substitutions data file.
#[derive(Deserialize)]
struct SubstitutionsData {
    substitutions: HashMap<String, Vec<String>>,
}

static SUBSTITUTIONS: LazyLock<HashMap<String, Vec<String>>> = LazyLock::new(|| {
    let json = include_str!("../../data/substitutions.json");
    let data: SubstitutionsData =
        serde_json::from_str(json).expect("Failed to parse substitutions.json");
    data.substitutions
});

/// Substitutes accepted in place of `canonical`, in preference order.
///
/// Returns an empty slice when no substitution entry exists; absence means
/// "no known substitute", not an error.
pub fn substitutes_for(canonical: &str) -> &'static [String] {
    SUBSTITUTIONS
        .get(canonical)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// True if `candidate` is an accepted substitute for `canonical`.
/// Both arguments are expected in canonical (normalized) form.
pub fn is_substitute(canonical: &str, candidate: &str) -> bool {
    substitutes_for(canonical).iter().any(|s| s == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_substitutes() {
        assert!(is_substitute("chicken", "turkey"));
        assert!(is_substitute("chicken", "tofu"));
        assert!(is_substitute("butter", "olive oil"));
        assert!(is_substitute("onion", "green onion"));
    }

    #[test]
    fn test_directional() {
        assert!(is_substitute("rice", "quinoa"));
        assert!(!is_substitute("quinoa", "rice"));
    }

    #[test]
    fn test_unknown_ingredient_has_no_substitutes() {
        assert!(substitutes_for("durian").is_empty());
        assert!(!is_substitute("durian", "jackfruit"));
    }

    #[test]
    fn test_order_preserved() {
        let subs = substitutes_for("pasta");
        assert_eq!(subs, ["spaghetti", "penne", "fettuccine", "linguine"]);
    }
}
