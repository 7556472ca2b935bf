use super::handlers::{
    analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
    generate_recipe::{__path_generate_recipe, generate_recipe},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, analyze_ingredients))]
pub struct GenerationApiDoc;

pub fn generation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/analyze-ingredients", state.args.server.root_path),
            post(analyze_ingredients),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
