use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One render-ready unit derived from a single line of generated recipe
/// text. Derived on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayElement {
    Heading { text: String },
    BulletItem { text: String },
    NumberedItem { text: String },
    LabeledFact { kind: FactKind, text: String },
    BoldLabel { text: String },
    Paragraph { text: String },
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    CookingTime,
    Calories,
}
