use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "ingredients must be between 1 and 500 characters"
    ))]
    pub ingredients: String,
    pub diet_filters: Option<DietFilters>,
    pub cooking_style: Option<String>,
    /// Overrides the language of the active locale.
    pub language: Option<String>,
    #[schema(example = 2)]
    pub servings: Option<u32>,
}

/// Dietary constraints the generated recipe must satisfy.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DietFilters {
    pub vegetarian: bool,
    pub nut_free: bool,
    pub non_spicy: bool,
    pub halal: bool,
    pub low_calorie: bool,
}

impl DietFilters {
    /// Comma-joined labels for the prompt; `None` when no flag is set.
    pub fn as_labels(&self) -> Option<String> {
        let mut labels = Vec::new();
        if self.vegetarian {
            labels.push("vegetarian");
        }
        if self.nut_free {
            labels.push("nut-free");
        }
        if self.non_spicy {
            labels.push("non-spicy");
        }
        if self.halal {
            labels.push("halal");
        }
        if self.low_calorie {
            labels.push("low-calorie");
        }

        if labels.is_empty() {
            None
        } else {
            Some(labels.join(", "))
        }
    }
}


#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    /// Data-URL embedded image (`data:image/...;base64,...`).
    #[validate(length(min = 1, message = "image_base64 must not be empty"))]
    pub image_base64: String,
}
