use crate::api::saved::SavedRecipeResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::models::SavedRecipe;
use crate::schema::saved_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/saved-recipes",
    tag = "saved",
    responses(
        (status = 200, description = "All saved recipes, newest first", body = [SavedRecipeResponse])
    )
)]
pub async fn list_saved_recipes(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
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

    let rows: Vec<SavedRecipe> = match saved_recipes::table
        .order(saved_recipes::saved_at.desc())
        .select(SavedRecipe::as_select())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to list saved recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to retrieve saved recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let recipes: Vec<SavedRecipeResponse> =
        rows.into_iter().map(SavedRecipeResponse::from).collect();

    (StatusCode::OK, Json(recipes)).into_response()
}
