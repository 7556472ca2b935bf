use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use idechef_core::domain::history::{ports::HistoryService, value_objects::Tier};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub recipe_count: u64,
    pub tier: Tier,
    /// 1-based level number, rising with the tier.
    pub tier_rank: u8,
    /// Tier name localized to the active locale.
    pub tier_name: String,
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "history",
    summary = "Fetch the caller's cooking profile",
    description = "Recipe count and the skill tier derived from it.",
    responses(
        (status = 200, body = ProfileResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ProfileResponse>, ApiError> {
    let summary = state
        .service
        .profile(identity)
        .await
        .map_err(ApiError::from)?;

    let locale = state.locale_store.get();

    Ok(Response::OK(ProfileResponse {
        recipe_count: summary.recipe_count,
        tier_rank: summary.tier.rank(),
        tier_name: summary.tier.name(locale).to_string(),
        tier: summary.tier,
    }))
}
