use utoipa::OpenApi;

// utoipa's derive rejects `nest(path = "", ...)`, so the sub-router docs
// (GenerationApiDoc, HistoryApiDoc, LocaleApiDoc) are merged here by listing
// their path operations directly; the resulting document is identical.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "IdeChef API"
    ),
    paths(
        crate::application::http::generation::handlers::generate_recipe::generate_recipe,
        crate::application::http::generation::handlers::analyze_ingredients::analyze_ingredients,
        crate::application::http::history::handlers::create_recipe::create_recipe,
        crate::application::http::history::handlers::list_recipes::list_recipes,
        crate::application::http::history::handlers::get_recipe::get_recipe,
        crate::application::http::history::handlers::get_rendered_recipe::get_rendered_recipe,
        crate::application::http::history::handlers::set_favorite::set_favorite,
        crate::application::http::history::handlers::update_notes::update_notes,
        crate::application::http::history::handlers::delete_recipe::delete_recipe,
        crate::application::http::history::handlers::get_profile::get_profile,
        crate::application::http::locale::handlers::get_locale::get_locale,
        crate::application::http::locale::handlers::set_locale::set_locale,
    )
)]
pub struct ApiDoc;
