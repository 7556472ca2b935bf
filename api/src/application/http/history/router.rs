use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    get_profile::{__path_get_profile, get_profile},
    get_recipe::{__path_get_recipe, get_recipe},
    get_rendered_recipe::{__path_get_rendered_recipe, get_rendered_recipe},
    list_recipes::{__path_list_recipes, list_recipes},
    set_favorite::{__path_set_favorite, set_favorite},
    update_notes::{__path_update_notes, update_notes},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_recipe,
    list_recipes,
    get_recipe,
    get_rendered_recipe,
    set_favorite,
    update_notes,
    delete_recipe,
    get_profile
))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(create_recipe),
        )
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(list_recipes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/rendered",
                state.args.server.root_path
            ),
            get(get_rendered_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/favorite",
                state.args.server.root_path
            ),
            put(set_favorite),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/notes",
                state.args.server.root_path
            ),
            put(update_notes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            delete(delete_recipe),
        )
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
