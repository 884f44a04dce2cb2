//! Ingredient match scoring.
//!
//! Scores how well a user's ingredient set covers a target ingredient list,
//! accepting substitutes from the substitution table.

use crate::normalize::normalize;
use crate::substitutions::is_substitute;

/// Score the user's coverage of `target_ingredients` as a percentage (0-100).
///
/// Each target ingredient counts as matched at most once: either its
/// canonical form is in the user's (normalized) set, or at least one user
/// ingredient is an accepted substitute for it. The score is the floor of
/// `matches / targets * 100`. An empty target list is vacuously satisfied
/// and scores 100.
pub fn match_score(user_ingredients: &[String], target_ingredients: &[String]) -> u8 {
    if target_ingredients.is_empty() {
        return 100;
    }

    let normalized_user: Vec<String> = user_ingredients.iter().map(|i| normalize(i)).collect();

    let mut matches = 0usize;
    for target in target_ingredients {
        let canonical = normalize(target);
        let matched = normalized_user
            .iter()
            .any(|user| *user == canonical || is_substitute(&canonical, user));
        if matched {
            matches += 1;
        }
    }

    (matches * 100 / target_ingredients.len()).min(100) as u8
}
