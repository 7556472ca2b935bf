use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::{app_errors::CoreError, identity::Identity},
        services::Service,
    },
    generation::{ports::LlmClient, value_objects::MAX_INGREDIENTS_LEN},
    history::{
        entities::RecipeRecord,
        helpers::derive_title,
        ports::{HistoryRepository, HistoryService},
        value_objects::{
            CreateRecipeInput, CreateRecipeOutput, ListRecipesFilter, ProfileSummary, Tier,
            TierProgress,
        },
    },
};

impl<L, H> HistoryService for Service<L, H>
where
    L: LlmClient,
    H: HistoryRepository,
{
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<CreateRecipeOutput, CoreError> {
        let ingredients = input.ingredients.trim().to_string();
        if ingredients.is_empty() {
            return Err(CoreError::InvalidInput(
                "Ingredients must not be empty".to_string(),
            ));
        }
        if ingredients.chars().count() > MAX_INGREDIENTS_LEN {
            return Err(CoreError::InvalidInput(format!(
                "Ingredients must be less than {MAX_INGREDIENTS_LEN} characters"
            )));
        }

        let recipe_title = derive_title(&input.recipe_text);
        let record = RecipeRecord::new(identity.id(), ingredients, recipe_title, input.recipe_text);

        let record = self.recipe_repository.insert(record).await?;

        // The record is committed at this point. A failed count must not
        // make the save look failed, or a retry would duplicate it.
        let progress = match self.recipe_repository.count_by_owner(identity.id()).await {
            Ok(recipe_count) => {
                let tier = Tier::from_count(recipe_count);
                let tier_changed = Tier::is_promotion_count(recipe_count).then_some(tier);
                if tier_changed.is_some() {
                    info!(user_id = %identity.id(), recipe_count, "user reached a new tier");
                }
                Some(TierProgress {
                    recipe_count,
                    tier,
                    tier_changed,
                })
            }
            Err(e) => {
                warn!(user_id = %identity.id(), "recipe count unavailable after insert: {e}");
                None
            }
        };

        Ok(CreateRecipeOutput { record, progress })
    }

    async fn list_recipes(
        &self,
        identity: Identity,
        filter: ListRecipesFilter,
    ) -> Result<Vec<RecipeRecord>, CoreError> {
        self.recipe_repository
            .list_by_owner(identity.id(), filter)
            .await
    }

    async fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<RecipeRecord, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn set_favorite(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        is_favorite: bool,
    ) -> Result<RecipeRecord, CoreError> {
        // Store first; a failed update changes nothing else.
        self.recipe_repository
            .set_favorite(recipe_id, identity.id(), is_favorite)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_notes(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        personal_notes: Option<String>,
    ) -> Result<RecipeRecord, CoreError> {
        self.recipe_repository
            .set_notes(recipe_id, identity.id(), personal_notes)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        let removed = self
            .recipe_repository
            .delete(recipe_id, identity.id())
            .await?;
        if !removed {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    async fn profile(&self, identity: Identity) -> Result<ProfileSummary, CoreError> {
        let recipe_count = self.recipe_repository.count_by_owner(identity.id()).await?;
        Ok(ProfileSummary {
            recipe_count,
            tier: Tier::from_count(recipe_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        generation::ports::MockLlmClient, history::ports::MockHistoryRepository,
    };
    use mockall::predicate::eq;

    fn service(repository: MockHistoryRepository) -> Service<MockLlmClient, MockHistoryRepository> {
        Service::new(MockLlmClient::new(), repository)
    }

    fn identity() -> Identity {
        Identity::new(Uuid::new_v4())
    }

    fn create_input(ingredients: &str, recipe_text: &str) -> CreateRecipeInput {
        CreateRecipeInput {
            ingredients: ingredients.to_string(),
            recipe_text: recipe_text.to_string(),
        }
    }

    #[tokio::test]
    async fn create_persists_trimmed_ingredients_and_derived_title() {
        let caller = identity();
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_insert()
            .withf(move |record| {
                record.user_id == caller.id()
                    && record.ingredients == "chicken, rice"
                    && record.recipe_title == "Chicken Fried Rice"
                    && !record.is_favorite
                    && record.personal_notes.is_none()
            })
            .times(1)
            .returning(|record| Box::pin(async move { Ok(record) }));
        repository
            .expect_count_by_owner()
            .with(eq(caller.id()))
            .returning(|_| Box::pin(async { Ok(1) }));

        let output = service(repository)
            .create_recipe(
                caller,
                create_input("  chicken, rice  ", "# Chicken Fried Rice\n\n- rice"),
            )
            .await
            .unwrap();

        assert_eq!(output.record.ingredients, "chicken, rice");
        let progress = output.progress.unwrap();
        assert_eq!(progress.recipe_count, 1);
        assert_eq!(progress.tier, Tier::Beginner);
        assert!(progress.tier_changed.is_none());
    }

    #[tokio::test]
    async fn tier_notification_fires_exactly_at_five_and_eleven() {
        for (count, expected) in [
            (4, None),
            (5, Some(Tier::Skilled)),
            (6, None),
            (10, None),
            (11, Some(Tier::Master)),
            (12, None),
        ] {
            let mut repository = MockHistoryRepository::new();
            repository
                .expect_insert()
                .returning(|record| Box::pin(async move { Ok(record) }));
            repository
                .expect_count_by_owner()
                .returning(move |_| Box::pin(async move { Ok(count) }));

            let output = service(repository)
                .create_recipe(identity(), create_input("chicken", "Soup"))
                .await
                .unwrap();
            assert_eq!(output.progress.unwrap().tier_changed, expected, "count {count}");
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_ingredients_without_touching_the_store() {
        let mut repository = MockHistoryRepository::new();
        repository.expect_insert().times(0);

        let err = service(repository)
            .create_recipe(identity(), create_input("   ", "text"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_bounds_are_counted_in_characters() {
        // 300 two-byte characters stay well inside the 500-character bound.
        let multibyte = "é".repeat(300);
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|record| Box::pin(async move { Ok(record) }));
        repository
            .expect_count_by_owner()
            .returning(|_| Box::pin(async { Ok(1) }));

        service(repository)
            .create_recipe(identity(), create_input(&multibyte, "Soup"))
            .await
            .unwrap();

        let mut repository = MockHistoryRepository::new();
        repository.expect_insert().times(0);
        let err = service(repository)
            .create_recipe(identity(), create_input(&"é".repeat(501), "Soup"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_survives_a_count_failure_after_the_insert() {
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|record| Box::pin(async move { Ok(record) }));
        repository
            .expect_count_by_owner()
            .returning(|_| Box::pin(async { Err(CoreError::PersistenceFailed) }));

        // The record is committed; the failed count only drops tier info.
        let output = service(repository)
            .create_recipe(identity(), create_input("chicken", "Soup"))
            .await
            .unwrap();
        assert_eq!(output.record.ingredients, "chicken");
        assert!(output.progress.is_none());
    }

    #[tokio::test]
    async fn untitled_text_falls_back_to_the_placeholder_title() {
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_insert()
            .withf(|record| record.recipe_title == "Resep Tanpa Judul")
            .times(1)
            .returning(|record| Box::pin(async move { Ok(record) }));
        repository
            .expect_count_by_owner()
            .returning(|_| Box::pin(async { Ok(1) }));

        service(repository)
            .create_recipe(identity(), create_input("chicken", "\n\n"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn favorite_toggle_round_trip_restores_the_record() {
        let caller = identity();
        let record = RecipeRecord::new(
            caller.id(),
            "chicken".to_string(),
            "Soup".to_string(),
            "Soup\n1. Boil.".to_string(),
        );
        let original = record.clone();

        let state = std::sync::Arc::new(std::sync::Mutex::new(record));
        let mut repository = MockHistoryRepository::new();
        let shared = state.clone();
        repository
            .expect_set_favorite()
            .returning(move |_, _, is_favorite| {
                let updated = {
                    let mut record = shared.lock().unwrap();
                    record.is_favorite = is_favorite;
                    record.clone()
                };
                Box::pin(async move { Ok(Some(updated)) })
            });

        let service = service(repository);
        let flipped = service
            .set_favorite(caller, original.id, true)
            .await
            .unwrap();
        assert!(flipped.is_favorite);

        let restored = service
            .set_favorite(caller, original.id, false)
            .await
            .unwrap();
        assert_eq!(restored, original);
    }

    #[tokio::test]
    async fn favorite_update_failure_surfaces_persistence_failed() {
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_set_favorite()
            .returning(|_, _, _| Box::pin(async { Err(CoreError::PersistenceFailed) }));

        let err = service(repository)
            .set_favorite(identity(), Uuid::new_v4(), true)
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::PersistenceFailed);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        repository
            .expect_delete()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let service = service(repository);
        let id = Uuid::new_v4();
        assert_eq!(
            service.get_recipe(identity(), id).await.unwrap_err(),
            CoreError::NotFound
        );
        assert_eq!(
            service.delete_recipe(identity(), id).await.unwrap_err(),
            CoreError::NotFound
        );
    }

    #[tokio::test]
    async fn profile_reports_count_and_tier() {
        let mut repository = MockHistoryRepository::new();
        repository
            .expect_count_by_owner()
            .returning(|_| Box::pin(async { Ok(7) }));

        let summary = service(repository).profile(identity()).await.unwrap();
        assert_eq!(summary.recipe_count, 7);
        assert_eq!(summary.tier, Tier::Skilled);
    }
}
