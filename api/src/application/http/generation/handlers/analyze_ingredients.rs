use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        generation::validators::AnalyzeIngredientsRequest,
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
    ports::GenerationService, value_objects::AnalyzeIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeIngredientsResponse {
    /// Comma-separated ingredient names recognized in the photo.
    pub ingredients: String,
}

#[utoipa::path(
    post,
    path = "/analyze-ingredients",
    tag = "generation",
    summary = "Extract ingredients from a photo",
    description = "Sends the embedded image to the vision model and returns the ingredient list it recognizes.",
    responses(
        (status = 200, body = AnalyzeIngredientsResponse)
    ),
    request_body = AnalyzeIngredientsRequest
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .analyze_ingredients(
            identity,
            AnalyzeIngredientsInput {
                image_base64: payload.image_base64,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientsResponse { ingredients }))
}
