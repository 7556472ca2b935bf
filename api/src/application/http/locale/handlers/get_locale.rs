use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use idechef_core::domain::locale::entities::Locale;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocaleResponse {
    pub locale: Locale,
}

#[utoipa::path(
    get,
    path = "/locale",
    tag = "locale",
    summary = "Read the active locale",
    responses(
        (status = 200, body = LocaleResponse)
    )
)]
pub async fn get_locale(State(state): State<AppState>) -> Result<Response<LocaleResponse>, ApiError> {
    let locale = state.locale_store.get();
    Ok(Response::OK(LocaleResponse { locale }))
}
