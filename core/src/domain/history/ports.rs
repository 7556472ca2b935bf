use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::{app_errors::CoreError, identity::Identity},
    history::{
        entities::RecipeRecord,
        value_objects::{CreateRecipeInput, CreateRecipeOutput, ListRecipesFilter, ProfileSummary},
    },
};

/// Repository over the owner's recipe records. Every operation is scoped to
/// one owner; the backing store enforces that scoping with the id pair.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn insert(
        &self,
        record: RecipeRecord,
    ) -> impl Future<Output = Result<RecipeRecord, CoreError>> + Send;

    /// Owner's records, newest first.
    fn list_by_owner(
        &self,
        user_id: Uuid,
        filter: ListRecipesFilter,
    ) -> impl Future<Output = Result<Vec<RecipeRecord>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeRecord>, CoreError>> + Send;

    fn set_favorite(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        is_favorite: bool,
    ) -> impl Future<Output = Result<Option<RecipeRecord>, CoreError>> + Send;

    fn set_notes(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
        personal_notes: Option<String>,
    ) -> impl Future<Output = Result<Option<RecipeRecord>, CoreError>> + Send;

    /// Returns whether a record was actually removed.
    fn delete(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn count_by_owner(&self, user_id: Uuid)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait HistoryService: Send + Sync {
    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<CreateRecipeOutput, CoreError>> + Send;

    fn list_recipes(
        &self,
        identity: Identity,
        filter: ListRecipesFilter,
    ) -> impl Future<Output = Result<Vec<RecipeRecord>, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeRecord, CoreError>> + Send;

    fn set_favorite(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        is_favorite: bool,
    ) -> impl Future<Output = Result<RecipeRecord, CoreError>> + Send;

    fn update_notes(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        personal_notes: Option<String>,
    ) -> impl Future<Output = Result<RecipeRecord, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ProfileSummary, CoreError>> + Send;
}
