use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        history::validators::SetFavoriteRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use idechef_core::domain::history::{entities::RecipeRecord, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetFavoriteResponse {
    pub data: RecipeRecord,
}

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}/favorite",
    tag = "history",
    summary = "Mark or unmark a saved recipe as favorite",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = SetFavoriteResponse),
        (status = 404, description = "No such recipe for this user")
    ),
    request_body = SetFavoriteRequest
)]
pub async fn set_favorite(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(recipe_id): Path<Uuid>,
    ValidateJson(payload): ValidateJson<SetFavoriteRequest>,
) -> Result<Response<SetFavoriteResponse>, ApiError> {
    let record = state
        .service
        .set_favorite(identity, recipe_id, payload.is_favorite)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SetFavoriteResponse { data: record }))
}
