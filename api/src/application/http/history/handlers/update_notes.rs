use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        history::validators::UpdateNotesRequest,
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
pub struct UpdateNotesResponse {
    pub data: RecipeRecord,
}

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}/notes",
    tag = "history",
    summary = "Replace the personal note on a saved recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = UpdateNotesResponse),
        (status = 404, description = "No such recipe for this user")
    ),
    request_body = UpdateNotesRequest
)]
pub async fn update_notes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(recipe_id): Path<Uuid>,
    ValidateJson(payload): ValidateJson<UpdateNotesRequest>,
) -> Result<Response<UpdateNotesResponse>, ApiError> {
    let record = state
        .service
        .update_notes(identity, recipe_id, payload.personal_notes)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateNotesResponse { data: record }))
}
