use base64::{Engine as _, engine::general_purpose};
use tracing::{error, info};

use crate::domain::{
    common::{
        entities::{app_errors::CoreError, identity::Identity},
        services::Service,
    },
    generation::{
        ports::{GenerationService, LlmClient},
        prompt::{PromptInputs, build_recipe_prompt},
        value_objects::{
            AnalyzeIngredientsInput, DEFAULT_SERVINGS, GenerateRecipeInput, MAX_INGREDIENTS_LEN,
            MIN_INGREDIENTS_LEN,
        },
    },
    history::ports::HistoryRepository,
};

const VISION_INSTRUCTION: &str = "Analyze this image. Identify every food \
    ingredient visible in it. Return ONLY the list of those ingredients as \
    comma-separated text, with no additional commentary.";

impl<L, H> GenerationService for Service<L, H>
where
    L: LlmClient,
    H: HistoryRepository,
{
    async fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> Result<String, CoreError> {
        let ingredients = input.ingredients.trim();
        // Bounds are in characters, not bytes; multibyte input counts once
        // per character.
        let ingredients_len = ingredients.chars().count();
        if ingredients_len < MIN_INGREDIENTS_LEN {
            return Err(CoreError::InvalidInput(format!(
                "Ingredients must be at least {MIN_INGREDIENTS_LEN} characters"
            )));
        }
        if ingredients_len > MAX_INGREDIENTS_LEN {
            return Err(CoreError::InvalidInput(format!(
                "Ingredients must be less than {MAX_INGREDIENTS_LEN} characters"
            )));
        }

        let servings = input
            .servings
            .filter(|count| *count >= 1)
            .unwrap_or(DEFAULT_SERVINGS);

        let diet_labels = input
            .diet_filters
            .as_deref()
            .map(str::trim)
            .filter(|labels| !labels.is_empty());

        let prompt = build_recipe_prompt(&PromptInputs {
            ingredients,
            cooking_style: input.cooking_style.as_deref(),
            diet_labels,
            language: &input.language,
            servings,
            labels: input.labels,
        });

        info!(user_id = %identity.id(), "generating recipe");

        // Single attempt; the raw model text is returned verbatim and only
        // interpreted at render time.
        let recipe = self.llm_client.generate_text(prompt).await.map_err(|e| {
            error!("recipe generation failed: {e}");
            CoreError::GenerationFailed
        })?;

        Ok(recipe)
    }

    async fn analyze_ingredients(
        &self,
        identity: Identity,
        input: AnalyzeIngredientsInput,
    ) -> Result<String, CoreError> {
        let payload = validate_image_payload(&input.image_base64)?;

        info!(user_id = %identity.id(), "analyzing ingredients from image");

        let ingredients = self
            .llm_client
            .generate_with_image(VISION_INSTRUCTION.to_string(), payload.to_string())
            .await
            .map_err(|e| {
                error!("ingredient analysis failed: {e}");
                CoreError::AnalysisFailed
            })?;

        Ok(ingredients.trim().to_string())
    }
}

/// Accepts only a well-formed data-URL image whose base64 section decodes to
/// something non-empty; returns the payload unchanged.
fn validate_image_payload(image_base64: &str) -> Result<&str, CoreError> {
    let invalid = || CoreError::InvalidInput("Invalid image data".to_string());

    if !image_base64.starts_with("data:image/") {
        return Err(invalid());
    }
    let (_, encoded) = image_base64.split_once(";base64,").ok_or_else(invalid)?;
    let decoded = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| invalid())?;
    if decoded.is_empty() {
        return Err(invalid());
    }

    Ok(image_base64)
}
