//! Recipe generation.
//!
//! The orchestrator: parses the raw ingredient text, scores every catalog
//! template, ranks the candidates, and produces fully resolved recipes via
//! the availability resolver and instruction customizer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::availability::resolve_pantry;
use crate::catalog::{templates, RecipeTemplate};
use crate::instructions::customize_instructions;
use crate::matcher::match_score;

/// Number of recipes returned when the caller does not ask for more.
pub const DEFAULT_MAX_RECIPES: usize = 3;

/// Displayed match percentage bounds after the cosmetic perturbation.
const MIN_DISPLAY_MATCH: i32 = 40;
const MAX_DISPLAY_MATCH: i32 = 95;

/// A recipe generated for one request.
///
/// Owned solely by the response it populates; saving one for later is the
/// server's concern and assigns a persistent identity there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub available_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub match_percentage: u8,
}

/// Split comma-separated free text into ingredient entries.
/// Segments are trimmed; empty segments are dropped.
pub fn parse_ingredient_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate up to `max_recipes` recipes for a comma-separated ingredient list.
///
/// The displayed match percentage carries a small random perturbation for
/// cosmetic variety, so repeated calls with the same input may differ by a
/// few points. Use [`generate_with_rng`] to pin the randomness.
pub fn generate(input: &str, max_recipes: usize) -> Vec<Recipe> {
    generate_with_rng(input, max_recipes, &mut rand::rng())
}

/// [`generate`] with an explicit random source.
pub fn generate_with_rng<R: Rng + ?Sized>(
    input: &str,
    max_recipes: usize,
    rng: &mut R,
) -> Vec<Recipe> {
    let user_ingredients = parse_ingredient_list(input);
    if user_ingredients.is_empty() {
        return Vec::new();
    }

    // A template is a candidate only when the user holds at least one
    // primary ingredient (or an accepted substitute for one).
    let mut candidates: Vec<Candidate> = templates()
        .iter()
        .filter_map(|template| {
            let primary_score = match_score(&user_ingredients, &template.primary_ingredients);
            if primary_score == 0 {
                return None;
            }
            let full_score = match_score(&user_ingredients, &template.all_ingredients());
            Some(Candidate {
                template,
                full_score,
                primary_score,
            })
        })
        .collect();

    // Stable sort keeps catalog order for fully tied candidates.
    candidates.sort_by(|a, b| {
        (b.full_score, b.primary_score).cmp(&(a.full_score, a.primary_score))
    });

    candidates
        .into_iter()
        .take(max_recipes)
        .map(|candidate| candidate.into_recipe(&user_ingredients, rng))
        .collect()
}

struct Candidate {
    template: &'static RecipeTemplate,
    full_score: u8,
    primary_score: u8,
}

impl Candidate {
    fn into_recipe<R: Rng + ?Sized>(self, user_ingredients: &[String], rng: &mut R) -> Recipe {
        let template = self.template;
        let resolved = resolve_pantry(user_ingredients, &template.all_ingredients());
        let instructions =
            customize_instructions(&template.instructions_template, &resolved.available);

        let perturbation = rng.random_range(-5..=10);
        let match_percentage = (i32::from(self.full_score) + perturbation)
            .clamp(MIN_DISPLAY_MATCH, MAX_DISPLAY_MATCH) as u8;

        Recipe {
            name: template.name.clone(),
            description: template.description.clone(),
            cook_time: template.cook_time.clone(),
            servings: template.servings.clone(),
            difficulty: template.difficulty.clone(),
            available_ingredients: resolved.available,
            missing_ingredients: resolved.missing,
            instructions,
            match_percentage,
        }
    }
}
