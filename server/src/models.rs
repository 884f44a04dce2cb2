use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved recipe row. The three ingredient/instruction lists are stored as
/// JSONB arrays of strings.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::saved_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SavedRecipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub available_ingredients: serde_json::Value,
    pub missing_ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub match_percentage: i32,
    pub saved_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub cook_time: &'a str,
    pub servings: &'a str,
    pub difficulty: &'a str,
    pub available_ingredients: serde_json::Value,
    pub missing_ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub match_percentage: i32,
}

/// A generated recipe as it appears on the wire, for both the generation
/// response and the save-recipe request body.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeneratedRecipe {
    pub name: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub available_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub match_percentage: i32,
}

impl From<shelfchef_core::Recipe> for GeneratedRecipe {
    fn from(recipe: shelfchef_core::Recipe) -> Self {
        Self {
            name: recipe.name,
            description: recipe.description,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            available_ingredients: recipe.available_ingredients,
            missing_ingredients: recipe.missing_ingredients,
            instructions: recipe.instructions,
            match_percentage: i32::from(recipe.match_percentage),
        }
    }
}
