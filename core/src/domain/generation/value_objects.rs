use crate::domain::locale::entities::LabelSet;

pub const MIN_INGREDIENTS_LEN: usize = 3;
pub const MAX_INGREDIENTS_LEN: usize = 500;
pub const DEFAULT_SERVINGS: u32 = 2;

pub struct GenerateRecipeInput {
    pub ingredients: String,
    /// Comma-joined diet labels, already serialized by the caller.
    pub diet_filters: Option<String>,
    /// Optional cooking-style tag to prioritize (e.g. stir-fry, soup).
    pub cooking_style: Option<String>,
    /// Name of the language the whole response must be written in.
    pub language: String,
    pub servings: Option<u32>,
    /// Estimate-line labels of the active locale; the classifier recognizes
    /// exactly these.
    pub labels: &'static LabelSet,
}

pub struct AnalyzeIngredientsInput {
    /// Data-URL embedded image (`data:image/...;base64,...`).
    pub image_base64: String,
}
