use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use idechef_core::domain::{
    history::ports::HistoryService,
    render::{classifier::classify_text, entities::DisplayElement},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderedRecipeResponse {
    pub recipe_title: String,
    /// One element per line of the stored recipe text, in order.
    pub elements: Vec<DisplayElement>,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}/rendered",
    tag = "history",
    summary = "Fetch one saved recipe as render-ready display elements",
    description = "Classifies every line of the stored recipe text against the active locale's estimate labels.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = RenderedRecipeResponse),
        (status = 404, description = "No such recipe for this user")
    )
)]
pub async fn get_rendered_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(recipe_id): Path<Uuid>,
) -> Result<Response<RenderedRecipeResponse>, ApiError> {
    let record = state
        .service
        .get_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    let labels = state.locale_store.get().labels();
    let elements = classify_text(&record.recipe_text, labels);

    Ok(Response::OK(RenderedRecipeResponse {
        recipe_title: record.recipe_title,
        elements,
    }))
}
