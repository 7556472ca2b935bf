use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRecipeRequest {
    /// The ingredient list the recipe was generated from.
    #[validate(length(
        min = 1,
        max = 500,
        message = "ingredients must be between 1 and 500 characters"
    ))]
    pub ingredients: String,
    #[validate(length(min = 1, message = "recipe_text must not be empty"))]
    pub recipe_text: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    #[schema(example = false)]
    pub favorites_only: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetFavoriteRequest {
    pub is_favorite: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateNotesRequest {
    /// `null` clears the note.
    pub personal_notes: Option<String>,
}
