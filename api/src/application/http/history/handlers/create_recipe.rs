use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        history::validators::CreateRecipeRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use idechef_core::domain::history::{
    entities::RecipeRecord,
    ports::HistoryService,
    value_objects::{CreateRecipeInput, Tier},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub data: RecipeRecord,
    /// `null` when the post-insert count could not be read; the record is
    /// saved either way.
    pub recipe_count: Option<u64>,
    pub tier: Option<Tier>,
    pub tier_name: Option<String>,
    /// Present exactly when this save promoted the user to a new tier.
    pub tier_changed: Option<Tier>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "history",
    summary = "Save a generated recipe to personal history",
    responses(
        (status = 201, body = CreateRecipeResponse)
    ),
    request_body = CreateRecipeRequest
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeRequest>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let output = state
        .service
        .create_recipe(
            identity,
            CreateRecipeInput {
                ingredients: payload.ingredients,
                recipe_text: payload.recipe_text,
            },
        )
        .await
        .map_err(ApiError::from)?;

    let locale = state.locale_store.get();
    let progress = output.progress;

    Ok(Response::Created(CreateRecipeResponse {
        data: output.record,
        recipe_count: progress.map(|p| p.recipe_count),
        tier: progress.map(|p| p.tier),
        tier_name: progress.map(|p| p.tier.name(locale).to_string()),
        tier_changed: progress.and_then(|p| p.tier_changed),
    }))
}
