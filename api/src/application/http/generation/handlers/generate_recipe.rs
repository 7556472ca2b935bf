use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        generation::validators::GenerateRecipeRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use idechef_core::domain::generation::{
    ports::GenerationService, value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub recipe: String,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "generation",
    summary = "Generate a recipe from a list of ingredients",
    description = "Builds an instruction prompt from the ingredients and options, asks the language model for a recipe and returns the raw text. Nothing is persisted.",
    responses(
        (status = 200, body = GenerateRecipeResponse)
    ),
    request_body = GenerateRecipeRequest
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let locale = state.locale_store.get();
    let language = payload
        .language
        .unwrap_or_else(|| locale.language_name().to_string());

    let recipe = state
        .service
        .generate_recipe(
            identity,
            GenerateRecipeInput {
                ingredients: payload.ingredients,
                diet_filters: payload.diet_filters.and_then(|f| f.as_labels()),
                cooking_style: payload.cooking_style,
                language,
                servings: payload.servings,
                labels: locale.labels(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { recipe }))
}
