//! Instruction skeleton customization.
//!
//! Fills `{placeholder}` slots in a template's instruction lines from the
//! resolved available-ingredient list. Each placeholder has a fixed
//! allowed-category set and a generic fallback phrase, kept in one rule table
//! so the rules stay auditable in isolation from instruction text.

/// How a placeholder resolves against the available-ingredient list.
enum Resolution {
    /// Fixed replacement text, independent of the pantry.
    Constant(&'static str),
    /// All available ingredients in the allowed set, joined with ", ".
    JoinAll {
        allowed: &'static [&'static str],
        fallback: &'static str,
    },
    /// The first available ingredient in the allowed set.
    First {
        allowed: &'static [&'static str],
        fallback: &'static str,
    },
}

struct PlaceholderRule {
    token: &'static str,
    resolution: Resolution,
}

const RULES: &[PlaceholderRule] = &[
    PlaceholderRule {
        token: "{eggs_count}",
        resolution: Resolution::Constant("2-3"),
    },
    PlaceholderRule {
        token: "{fillings}",
        resolution: Resolution::JoinAll {
            allowed: &["cheese", "tomato", "onion", "spinach", "mushrooms"],
            fallback: "your choice of fillings",
        },
    },
    PlaceholderRule {
        token: "{protein}",
        resolution: Resolution::First {
            allowed: &["chicken", "beef", "eggs", "tofu"],
            fallback: "protein of choice",
        },
    },
    PlaceholderRule {
        token: "{aromatics}",
        resolution: Resolution::JoinAll {
            allowed: &["onion", "garlic", "ginger"],
            fallback: "onion and garlic",
        },
    },
    PlaceholderRule {
        token: "{vegetables}",
        resolution: Resolution::JoinAll {
            allowed: &["tomato", "bell pepper", "mushrooms", "spinach", "carrot"],
            fallback: "your choice of vegetables",
        },
    },
    PlaceholderRule {
        token: "{toppings}",
        resolution: Resolution::JoinAll {
            allowed: &["cheese", "herbs", "tomato"],
            fallback: "desired toppings",
        },
    },
    PlaceholderRule {
        token: "{seasonings}",
        resolution: Resolution::Constant("salt, pepper, and seasonings to taste"),
    },
    PlaceholderRule {
        token: "{hard_vegetables}",
        resolution: Resolution::JoinAll {
            allowed: &["carrot", "potato", "celery", "onion"],
            fallback: "carrots and celery",
        },
    },
    PlaceholderRule {
        token: "{soft_vegetables}",
        resolution: Resolution::JoinAll {
            allowed: &["tomato", "spinach", "mushrooms"],
            fallback: "tomatoes and leafy greens",
        },
    },
];

impl Resolution {
    fn resolve(&self, available_ingredients: &[String]) -> String {
        match self {
            Resolution::Constant(text) => (*text).to_string(),
            Resolution::JoinAll { allowed, fallback } => {
                let matched = filter_allowed(available_ingredients, allowed);
                if matched.is_empty() {
                    (*fallback).to_string()
                } else {
                    matched.join(", ")
                }
            }
            Resolution::First { allowed, fallback } => {
                filter_allowed(available_ingredients, allowed)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| (*fallback).to_string())
            }
        }
    }
}

/// Case-insensitive filter of available ingredients against an allowed set,
/// preserving availability order.
fn filter_allowed(available_ingredients: &[String], allowed: &[&str]) -> Vec<String> {
    available_ingredients
        .iter()
        .filter(|ing| {
            let lower = ing.to_lowercase();
            allowed.contains(&lower.as_str())
        })
        .cloned()
        .collect()
}

/// Customize a template's instruction lines for the resolved pantry.
///
/// Lines are processed independently; lines without a recognized placeholder
/// pass through unchanged (including unrecognized `{...}` tokens). Output
/// preserves input line order and count exactly.
pub fn customize_instructions(
    template_lines: &[String],
    available_ingredients: &[String],
) -> Vec<String> {
    template_lines
        .iter()
        .map(|line| {
            let mut out = line.clone();
            for rule in RULES {
                if out.contains(rule.token) {
                    out = out.replace(rule.token, &rule.resolution.resolve(available_ingredients));
                }
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_constant_placeholders() {
        let lines = owned(&["Beat {eggs_count} eggs", "add {seasonings}"]);
        let out = customize_instructions(&lines, &[]);
        assert_eq!(out[0], "Beat 2-3 eggs");
        assert_eq!(out[1], "add salt, pepper, and seasonings to taste");
    }

    #[test]
    fn test_joins_matches_in_order() {
        let lines = owned(&["Add {fillings} to one half"]);
        let out = customize_instructions(&lines, &owned(&["cheese", "bread", "onion"]));
        assert_eq!(out[0], "Add cheese, onion to one half");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let lines = owned(&["Add {fillings}"]);
        let out = customize_instructions(&lines, &owned(&["Cheese"]));
        assert_eq!(out[0], "Add Cheese");
    }

    #[test]
    fn test_fallback_when_no_match() {
        let lines = owned(&["Add {aromatics} and stir-fry"]);
        let out = customize_instructions(&lines, &owned(&["bread"]));
        assert_eq!(out[0], "Add onion and garlic and stir-fry");
    }

    #[test]
    fn test_protein_takes_first_match_only() {
        let lines = owned(&["Add {protein} and cook"]);
        let out = customize_instructions(&lines, &owned(&["chicken", "tofu"]));
        assert_eq!(out[0], "Add chicken and cook");

        let out = customize_instructions(&lines, &owned(&["rice"]));
        assert_eq!(out[0], "Add protein of choice and cook");
    }

    #[test]
    fn test_unrecognized_placeholder_passes_through() {
        let lines = owned(&["Add {cheese} and seasonings"]);
        let out = customize_instructions(&lines, &owned(&["cheese"]));
        assert_eq!(out[0], "Add {cheese} and seasonings");
    }

    #[test]
    fn test_plain_lines_unchanged() {
        let lines = owned(&["Serve warm", ""]);
        let out = customize_instructions(&lines, &owned(&["cheese"]));
        assert_eq!(out, lines);
    }

    #[test]
    fn test_line_count_preserved() {
        let lines = owned(&["a", "Add {fillings}", "c", "Add {protein}"]);
        let out = customize_instructions(&lines, &[]);
        assert_eq!(out.len(), lines.len());
    }

    #[test]
    fn test_repeated_placeholder_in_one_line() {
        let lines = owned(&["Return {protein} to pan with more {protein}"]);
        let out = customize_instructions(&lines, &owned(&["tofu"]));
        assert_eq!(out[0], "Return tofu to pan with more tofu");
    }
}
