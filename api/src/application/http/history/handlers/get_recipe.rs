use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use idechef_core::domain::history::{entities::RecipeRecord, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecipeResponse {
    pub data: RecipeRecord,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "history",
    summary = "Fetch one saved recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 404, description = "No such recipe for this user")
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(recipe_id): Path<Uuid>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let record = state
        .service
        .get_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: record }))
}
