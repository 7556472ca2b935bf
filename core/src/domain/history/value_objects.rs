use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{history::entities::RecipeRecord, locale::entities::Locale};

pub struct CreateRecipeInput {
    pub ingredients: String,
    pub recipe_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListRecipesFilter {
    pub favorites_only: bool,
}

#[derive(Debug, PartialEq)]
pub struct CreateRecipeOutput {
    pub record: RecipeRecord,
    /// Count and tier after the insert. `None` when the count could not be
    /// read; the record itself is committed either way.
    pub progress: Option<TierProgress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierProgress {
    pub recipe_count: u64,
    pub tier: Tier,
    /// Set exactly when this create landed the count on the first record of
    /// a new tier (5 or 11), never on later counts within the tier.
    pub tier_changed: Option<Tier>,
}

#[derive(Debug, PartialEq)]
pub struct ProfileSummary {
    pub recipe_count: u64,
    pub tier: Tier,
}

/// Derived skill level; a pure function of the owner's total record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Skilled,
    Master,
}

impl Tier {
    pub fn from_count(recipe_count: u64) -> Tier {
        if recipe_count < 5 {
            Tier::Beginner
        } else if recipe_count <= 10 {
            Tier::Skilled
        } else {
            Tier::Master
        }
    }

    /// True only for the first count of a new tier.
    pub fn is_promotion_count(recipe_count: u64) -> bool {
        recipe_count == 5 || recipe_count == 11
    }

    pub fn rank(&self) -> u8 {
        match self {
            Tier::Beginner => 1,
            Tier::Skilled => 2,
            Tier::Master => 3,
        }
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Id, Tier::Beginner) => "Koki Pemula 🥕",
            (Locale::Id, Tier::Skilled) => "Juru Masak Handal 🔪",
            (Locale::Id, Tier::Master) => "Master Chef 👨‍🍳",
            (Locale::En, Tier::Beginner) => "Beginner Chef 🥕",
            (Locale::En, Tier::Skilled) => "Skilled Cook 🔪",
            (Locale::En, Tier::Master) => "Master Chef 👨‍🍳",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_count(0), Tier::Beginner);
        assert_eq!(Tier::from_count(4), Tier::Beginner);
        assert_eq!(Tier::from_count(5), Tier::Skilled);
        assert_eq!(Tier::from_count(10), Tier::Skilled);
        assert_eq!(Tier::from_count(11), Tier::Master);
        assert_eq!(Tier::from_count(100), Tier::Master);
    }

    #[test]
    fn promotion_fires_only_at_five_and_eleven() {
        let fired: Vec<u64> = (1..=20).filter(|c| Tier::is_promotion_count(*c)).collect();
        assert_eq!(fired, vec![5, 11]);
    }

    #[test]
    fn rank_rises_with_the_tier() {
        assert!(Tier::Beginner.rank() < Tier::Skilled.rank());
        assert!(Tier::Skilled.rank() < Tier::Master.rank());
    }
}
