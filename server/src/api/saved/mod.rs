pub mod create;
pub mod delete;
pub mod list;

use crate::models::SavedRecipe;
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for saved-recipe endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/save-recipe", post(create::save_recipe))
        .route("/api/saved-recipes", get(list::list_saved_recipes))
        .route(
            "/api/saved-recipes/{id}",
            axum::routing::delete(delete::delete_saved_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::save_recipe,
        list::list_saved_recipes,
        delete::delete_saved_recipe,
    ),
    components(schemas(
        SavedRecipeResponse,
        delete::DeleteResponse,
    ))
)]
pub struct ApiDoc;

/// A saved recipe as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SavedRecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub available_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub match_percentage: i32,
    pub saved_at: DateTime<Utc>,
}

impl From<SavedRecipe> for SavedRecipeResponse {
    fn from(row: SavedRecipe) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            cook_time: row.cook_time,
            servings: row.servings,
            difficulty: row.difficulty,
            available_ingredients: serde_json::from_value(row.available_ingredients)
                .unwrap_or_default(),
            missing_ingredients: serde_json::from_value(row.missing_ingredients)
                .unwrap_or_default(),
            instructions: serde_json::from_value(row.instructions).unwrap_or_default(),
            match_percentage: row.match_percentage,
            saved_at: row.saved_at,
        }
    }
}
