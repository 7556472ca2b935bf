use crate::{domain::history::entities::RecipeRecord, entity::recipes};

impl From<&recipes::Model> for RecipeRecord {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            ingredients: model.ingredients.clone(),
            recipe_title: model.recipe_title.clone(),
            recipe_text: model.recipe_text.clone(),
            is_favorite: model.is_favorite,
            personal_notes: model.personal_notes.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for RecipeRecord {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}
