pub mod create_recipe;
pub mod delete_recipe;
pub mod get_profile;
pub mod get_recipe;
pub mod get_rendered_recipe;
pub mod list_recipes;
pub mod set_favorite;
pub mod update_notes;
