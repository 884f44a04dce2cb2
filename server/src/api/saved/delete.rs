use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::schema::saved_recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/saved-recipes/{id}",
    tag = "saved",
    params(
        ("id" = Uuid, Path, description = "Saved recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = DeleteResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_saved_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
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

    let deleted = match diesel::delete(saved_recipes::table.find(id)).execute(&mut conn) {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to delete saved recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    if deleted == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Recipe deleted successfully".to_string(),
        }),
    )
        .into_response()
}
