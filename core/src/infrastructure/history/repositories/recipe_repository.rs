use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        history::{
            entities::RecipeRecord, ports::HistoryRepository, value_objects::ListRecipesFilter,
        },
    },
    entity::recipes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_owned(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<crate::entity::recipes::Model>, CoreError> {
        Entity::find()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe: {}", e);
                CoreError::PersistenceFailed
            })
    }
}

impl HistoryRepository for PostgresRecipeRepository {
    async fn insert(&self, record: RecipeRecord) -> Result<RecipeRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            ingredients: Set(record.ingredients.clone()),
            recipe_title: Set(record.recipe_title.clone()),
            recipe_text: Set(record.recipe_text.clone()),
            is_favorite: Set(record.is_favorite),
            personal_notes: Set(record.personal_notes.clone()),
            created_at: Set(record.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert recipe: {}", e);
                CoreError::PersistenceFailed
            })?;

        Ok(RecipeRecord::from(created))
    }

    async fn list_by_owner(
        &self,
        user_id: Uuid,
        filter: ListRecipesFilter,
    ) -> Result<Vec<RecipeRecord>, CoreError> {
        let mut query = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by(Column::CreatedAt, Order::Desc);

        if filter.favorites_only {
            query = query.filter(Column::IsFavorite.eq(true));
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list recipes: {}", e);
            CoreError::PersistenceFailed
        })?;

        Ok(models.iter().map(RecipeRecord::from).collect())
    }

    async fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RecipeRecord>, CoreError> {
        let model = self.find_owned(recipe_id, user_id).await?;
        Ok(model.map(RecipeRecord::from))
    }

    async fn set_favorite(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        is_favorite: bool,
    ) -> Result<Option<RecipeRecord>, CoreError> {
        let Some(model) = self.find_owned(recipe_id, user_id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.is_favorite = Set(is_favorite);

        let updated = active_model.update(&self.db).await.map_err(|e| {
            error!("Failed to update favorite flag: {}", e);
            CoreError::PersistenceFailed
        })?;

        Ok(Some(RecipeRecord::from(updated)))
    }

    async fn set_notes(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        personal_notes: Option<String>,
    ) -> Result<Option<RecipeRecord>, CoreError> {
        let Some(model) = self.find_owned(recipe_id, user_id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.personal_notes = Set(personal_notes);

        let updated = active_model.update(&self.db).await.map_err(|e| {
            error!("Failed to update personal notes: {}", e);
            CoreError::PersistenceFailed
        })?;

        Ok(Some(RecipeRecord::from(updated)))
    }

    async fn delete(&self, recipe_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::PersistenceFailed
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn count_by_owner(&self, user_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count recipes: {}", e);
                CoreError::PersistenceFailed
            })
    }
}
