//! Pantry availability resolution.
//!
//! Partitions a template's ingredient list into what the user already holds
//! (directly or via an accepted substitute) and what is still missing, then
//! tops the shopping list up with pantry staples.

use crate::normalize::normalize;
use crate::substitutions::is_substitute;

/// Staples appended to the missing list when the user does not hold them.
const STAPLES: &[&str] = &["salt", "pepper", "oil", "butter"];

/// Cap on the missing-ingredient list. Template ingredients take priority
/// over staple top-ups because they are inserted first.
const MAX_MISSING: usize = 4;

/// A template's ingredient list resolved against the user's pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPantry {
    /// Ingredients the user holds, in template declaration order. Direct
    /// matches keep the template's spelling; substitute matches keep the
    /// user's own spelling.
    pub available: Vec<String>,
    /// Ingredients still needed, capped at 4 entries.
    pub missing: Vec<String>,
}

/// Resolve `template_ingredients` against the user's ingredient set.
pub fn resolve_pantry(
    user_ingredients: &[String],
    template_ingredients: &[String],
) -> ResolvedPantry {
    let normalized_user: Vec<String> = user_ingredients.iter().map(|i| normalize(i)).collect();

    let mut available = Vec::new();
    let mut missing = Vec::new();

    for template_ing in template_ingredients {
        let canonical = normalize(template_ing);

        if normalized_user.iter().any(|user| *user == canonical) {
            available.push(template_ing.clone());
            continue;
        }

        // Substitute matches keep the user's literal spelling.
        let substitute = user_ingredients
            .iter()
            .zip(normalized_user.iter())
            .find(|(_, user_canonical)| is_substitute(&canonical, user_canonical));

        match substitute {
            Some((user_ing, _)) => available.push(user_ing.clone()),
            None => missing.push(canonical),
        }
    }

    for staple in STAPLES {
        let staple = (*staple).to_string();
        if !normalized_user.contains(&staple) && !missing.contains(&staple) {
            missing.push(staple);
        }
    }

    missing.truncate(MAX_MISSING);

    ResolvedPantry { available, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_direct_match_keeps_template_spelling() {
        let resolved = resolve_pantry(&owned(&["Eggs", "cheese"]), &owned(&["eggs", "cheese"]));
        assert_eq!(resolved.available, ["eggs", "cheese"]);
    }

    #[test]
    fn test_substitute_match_keeps_user_spelling() {
        let resolved = resolve_pantry(&owned(&["turkey"]), &owned(&["chicken"]));
        assert_eq!(resolved.available, ["turkey"]);
    }

    #[test]
    fn test_unmatched_ingredient_goes_missing_as_canonical() {
        let resolved = resolve_pantry(&owned(&["bread"]), &owned(&["bread", "garlic"]));
        assert_eq!(resolved.available, ["bread"]);
        assert_eq!(resolved.missing[0], "garlic");
    }

    #[test]
    fn test_staples_appended_after_template_ingredients() {
        let resolved = resolve_pantry(&owned(&["bread"]), &owned(&["bread", "garlic"]));
        // Garlic first, then staples until the cap.
        assert_eq!(resolved.missing, ["garlic", "salt", "pepper", "oil"]);
    }

    #[test]
    fn test_missing_capped_at_four() {
        let resolved = resolve_pantry(
            &[],
            &owned(&["bread", "garlic", "butter", "cheese", "parsley"]),
        );
        assert_eq!(resolved.missing.len(), 4);
        // All four slots go to template ingredients; no room for staples.
        assert_eq!(resolved.missing, ["bread", "garlic", "butter", "cheese"]);
    }

    #[test]
    fn test_owned_staples_not_listed() {
        let resolved = resolve_pantry(&owned(&["salt", "pepper", "oil", "butter"]), &[]);
        assert!(resolved.missing.is_empty());
    }

    #[test]
    fn test_staple_not_duplicated_when_template_lists_it() {
        // Butter is both a template ingredient and a staple.
        let resolved = resolve_pantry(&[], &owned(&["butter"]));
        assert_eq!(
            resolved
                .missing
                .iter()
                .filter(|ing| ing.as_str() == "butter")
                .count(),
            1
        );
    }

    #[test]
    fn test_each_template_ingredient_contributes_one_entry() {
        // Both cheddar and mozzarella substitute for cheese; only the first wins.
        let resolved = resolve_pantry(&owned(&["cheddar", "mozzarella"]), &owned(&["cheese"]));
        assert_eq!(resolved.available, ["cheddar"]);
    }
}
