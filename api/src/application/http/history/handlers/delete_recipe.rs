use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use idechef_core::domain::history::ports::HistoryService;

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    tag = "history",
    summary = "Delete a saved recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "No such recipe for this user")
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(recipe_id): Path<Uuid>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
