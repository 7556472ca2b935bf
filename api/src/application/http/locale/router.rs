use super::handlers::{
    get_locale::{__path_get_locale, get_locale},
    set_locale::{__path_set_locale, set_locale},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_locale, set_locale))]
pub struct LocaleApiDoc;

pub fn locale_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/locale", state.args.server.root_path),
            get(get_locale),
        )
        .route(
            &format!("{}/locale", state.args.server.root_path),
            put(set_locale),
        )
}
