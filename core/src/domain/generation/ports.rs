use std::future::Future;

use crate::domain::{
    common::entities::{app_errors::CoreError, identity::Identity},
    generation::value_objects::{AnalyzeIngredientsInput, GenerateRecipeInput},
};

/// Client for the external language model. One call per request, no retry;
/// implementations log upstream detail and bound the call with a timeout.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Multimodal call; `image_data_url` is a data-URL embedded image.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data_url: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait GenerationService: Send + Sync {
    /// Validates input, builds the instruction prompt and returns the raw
    /// model text verbatim. No persistence happens here.
    fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Returns a comma-separated ingredient list extracted from an image.
    fn analyze_ingredients(
        &self,
        identity: Identity,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
