pub mod availability;
pub mod catalog;
pub mod generator;
pub mod instructions;
pub mod matcher;
pub mod normalize;
pub mod substitutions;

pub use availability::{resolve_pantry, ResolvedPantry};
pub use catalog::{templates, RecipeTemplate};
pub use generator::{
    generate, generate_with_rng, parse_ingredient_list, Recipe, DEFAULT_MAX_RECIPES,
};
pub use instructions::customize_instructions;
pub use matcher::match_score;
pub use normalize::normalize;
pub use substitutions::{is_substitute, substitutes_for};
