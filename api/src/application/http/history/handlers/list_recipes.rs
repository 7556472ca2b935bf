use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        history::validators::ListRecipesParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use idechef_core::domain::history::{
    entities::RecipeRecord, ports::HistoryService, value_objects::ListRecipesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListRecipesResponse {
    pub data: Vec<RecipeRecord>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "history",
    summary = "List the caller's saved recipes, newest first",
    params(ListRecipesParams),
    responses(
        (status = 200, body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<ListRecipesParams>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let records = state
        .service
        .list_recipes(
            identity,
            ListRecipesFilter {
                favorites_only: params.favorites_only.unwrap_or(false),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse { data: records }))
}
