use axum::{Json, extract::State};

use super::get_locale::LocaleResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use idechef_core::domain::locale::entities::Locale;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetLocaleRequest {
    pub locale: Locale,
}

#[utoipa::path(
    put,
    path = "/locale",
    tag = "locale",
    summary = "Switch the active locale",
    description = "Persists the choice and notifies every subscriber. On persistence failure the active locale is unchanged.",
    responses(
        (status = 200, body = LocaleResponse)
    ),
    request_body = SetLocaleRequest
)]
pub async fn set_locale(
    State(state): State<AppState>,
    Json(payload): Json<SetLocaleRequest>,
) -> Result<Response<LocaleResponse>, ApiError> {
    state
        .locale_store
        .set(payload.locale)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LocaleResponse {
        locale: payload.locale,
    }))
}
