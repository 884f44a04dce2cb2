use crate::api::ErrorResponse;
use crate::models::GeneratedRecipe;
use crate::AppState;
use axum::routing::post;
use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Returns the router for the recipe generation endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate-recipes", post(generate_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate_recipes),
    components(schemas(GenerateRecipesRequest, GenerateRecipesResponse))
)]
pub struct ApiDoc;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipesRequest {
    /// Comma-separated free-text ingredient list, e.g. "eggs, cheese, onion"
    pub ingredients: String,
    /// Maximum number of recipes to return (default: 3)
    pub max_recipes: Option<usize>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub recipes: Vec<GeneratedRecipe>,
}

#[utoipa::path(
    post,
    path = "/api/generate-recipes",
    tag = "generate",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, description = "Generated recipes, best match first", body = GenerateRecipesResponse),
        (status = 400, description = "No ingredients provided", body = ErrorResponse)
    )
)]
pub async fn generate_recipes(Json(request): Json<GenerateRecipesRequest>) -> impl IntoResponse {
    if request.ingredients.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please provide ingredients".to_string(),
            }),
        )
            .into_response();
    }

    let max_recipes = request
        .max_recipes
        .unwrap_or(shelfchef_core::DEFAULT_MAX_RECIPES);

    let recipes: Vec<GeneratedRecipe> = shelfchef_core::generate(&request.ingredients, max_recipes)
        .into_iter()
        .map(GeneratedRecipe::from)
        .collect();

    tracing::info!(
        count = recipes.len(),
        "generated recipes for ingredient list"
    );

    (StatusCode::OK, Json(GenerateRecipesResponse { recipes })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn post_generate(
        ingredients: &str,
        max_recipes: Option<usize>,
    ) -> (StatusCode, serde_json::Value) {
        let response = generate_recipes(Json(GenerateRecipesRequest {
            ingredients: ingredients.to_string(),
            max_recipes,
        }))
        .await
        .into_response();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_blank_ingredients_rejected() {
        let (status, json) = post_generate("   ", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Please provide ingredients");
    }

    #[tokio::test]
    async fn test_generate_response_shape() {
        let (status, json) = post_generate("eggs, cheese, onion", None).await;
        assert_eq!(status, StatusCode::OK);

        let recipes = json["recipes"].as_array().unwrap();
        assert!(!recipes.is_empty());
        for field in [
            "name",
            "description",
            "cook_time",
            "servings",
            "difficulty",
            "available_ingredients",
            "missing_ingredients",
            "instructions",
            "match_percentage",
        ] {
            assert!(recipes[0].get(field).is_some(), "missing field {field}");
        }
    }

    #[tokio::test]
    async fn test_unknown_ingredients_return_empty_list() {
        let (status, json) = post_generate("durian", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["recipes"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_max_recipes_limits_results() {
        let (status, json) = post_generate("eggs, cheese, bread, garlic, rice", Some(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recipes"].as_array().unwrap().len(), 1);
    }
}
