//! Ingredient name normalization.
//!
//! Canonicalizes free-text ingredient names (case, whitespace, plurals,
//! synonyms) so that matching is insensitive to superficial spelling
//! variation. Normalization is applied identically to user input and to
//! catalog ingredient names before any comparison.

/// Fixed plural/synonym corrections, applied after lowercasing and trimming.
/// Inputs with no entry pass through unchanged.
const CORRECTIONS: &[(&str, &str)] = &[
    ("tomatoes", "tomato"),
    ("onions", "onion"),
    ("eggs", "egg"),
    ("chickens", "chicken"),
    ("cheeses", "cheese"),
    ("mushroom", "mushrooms"),
    ("bell peppers", "bell pepper"),
    ("green onions", "green onion"),
    ("scallions", "green onion"),
];

/// Normalize an ingredient name to its canonical form.
///
/// Total over all string input and idempotent: normalizing an
/// already-normalized name yields the same value.
pub fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    for (variant, canonical) in CORRECTIONS {
        if lower == *variant {
            return (*canonical).to_string();
        }
    }

    lower
}
