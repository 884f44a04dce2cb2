use crate::api::saved::SavedRecipeResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::models::{GeneratedRecipe, NewSavedRecipe, SavedRecipe};
use crate::schema::saved_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/save-recipe",
    tag = "saved",
    request_body = GeneratedRecipe,
    responses(
        (status = 201, description = "Recipe saved", body = SavedRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn save_recipe(
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<GeneratedRecipe>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Database connection failed".to_string(),
                }),
            )
                .into_response()
        }
    };

    let new_recipe = NewSavedRecipe {
        name: &request.name,
        description: &request.description,
        cook_time: &request.cook_time,
        servings: &request.servings,
        difficulty: &request.difficulty,
        available_ingredients: serde_json::json!(request.available_ingredients),
        missing_ingredients: serde_json::json!(request.missing_ingredients),
        instructions: serde_json::json!(request.instructions),
        match_percentage: request.match_percentage,
    };

    let saved: SavedRecipe = match diesel::insert_into(saved_recipes::table)
        .values(&new_recipe)
        .returning(SavedRecipe::as_returning())
        .get_result(&mut conn)
    {
        Ok(row) => row,
        Err(e) => {
            tracing::error!("Failed to save recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(SavedRecipeResponse::from(saved)),
    )
        .into_response()
}
