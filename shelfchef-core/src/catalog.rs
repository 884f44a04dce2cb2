//! The static recipe catalog.
//!
//! Recipe templates are loaded from `data/templates.json` at compile time
//! into a read-only structure and never mutated afterwards. Catalog order is
//! significant: it is the tie-break order for equally-scored candidates.

use serde::Deserialize;
use std::sync::LazyLock;

/// A recipe template: the static skeleton a generated recipe is built from.
///
/// Primary ingredients gate whether the template is a candidate at all;
/// optional ingredients only improve the match. Instruction lines may contain
/// `{placeholder}` slots filled in by the instruction customizer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeTemplate {
    pub name: String,
    pub description: String,
    pub primary_ingredients: Vec<String>,
    pub optional_ingredients: Vec<String>,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub category: String,
    pub instructions_template: Vec<String>,
}

impl RecipeTemplate {
    /// Primary then optional ingredients, in declaration order.
    pub fn all_ingredients(&self) -> Vec<String> {
        self.primary_ingredients
            .iter()
            .chain(self.optional_ingredients.iter())
            .cloned()
            .collect()
    }
}

/// The raw JSON structure for the templates data file.
#[derive(Deserialize)]
struct TemplatesData {
    templates: Vec<RecipeTemplate>,
}

static TEMPLATES: LazyLock<Vec<RecipeTemplate>> = LazyLock::new(|| {
    let json = include_str!("../../data/templates.json");
    let data: TemplatesData = serde_json::from_str(json).expect("Failed to parse templates.json");
    data.templates
});

/// All recipe templates, in catalog declaration order.
pub fn templates() -> &'static [RecipeTemplate] {
    &TEMPLATES
}
