use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One saved recipe in a user's personal history. Created exactly once per
/// confirmed generation; only the favorite flag and the personal note are
/// mutable afterwards. Ownership never transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredients: String,
    pub recipe_title: String,
    pub recipe_text: String,
    pub is_favorite: bool,
    pub personal_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RecipeRecord {
    pub fn new(user_id: Uuid, ingredients: String, recipe_title: String, recipe_text: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            ingredients,
            recipe_title,
            recipe_text,
            is_favorite: false,
            personal_notes: None,
            created_at: now,
        }
    }
}
