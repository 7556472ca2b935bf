use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display language of the application. Exactly two locales exist;
/// Indonesian is the default when nothing valid is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    /// Strict parse of a persisted tag. Anything unknown is `None`;
    /// callers fall back to the default locale.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag.trim() {
            "id" => Some(Locale::Id),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Language name used in generation prompts ("write the response in ...").
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::Id => "Bahasa Indonesia",
            Locale::En => "English",
        }
    }

    pub fn labels(&self) -> &'static LabelSet {
        match self {
            Locale::Id => &LABELS_ID,
            Locale::En => &LABELS_EN,
        }
    }
}

/// Localized labels for the two estimate lines every generated recipe ends
/// with. The prompt builder writes these labels and the line classifier
/// matches them, so both sides must share one set.
pub struct LabelSet {
    pub cooking_time_label: &'static str,
    pub calories_label: &'static str,
    pub cooking_time_pattern: Regex,
    pub calories_pattern: Regex,
}

pub static LABELS_ID: LazyLock<LabelSet> = LazyLock::new(|| LabelSet {
    cooking_time_label: "Estimasi Waktu Memasak",
    calories_label: "Estimasi Jumlah Kalori",
    cooking_time_pattern: Regex::new(r"(?i)Estimasi Waktu Memasak:").expect("valid pattern"),
    calories_pattern: Regex::new(r"(?i)Estimasi.*Kalori:").expect("valid pattern"),
});

pub static LABELS_EN: LazyLock<LabelSet> = LazyLock::new(|| LabelSet {
    cooking_time_label: "Cooking Time",
    calories_label: "Estimated Calories",
    cooking_time_pattern: Regex::new(r"(?i)Cooking Time:").expect("valid pattern"),
    calories_pattern: Regex::new(r"(?i)Calories:").expect("valid pattern"),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        assert_eq!(Locale::from_tag("id"), Some(Locale::Id));
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag(Locale::En.as_tag()), Some(Locale::En));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
        assert_eq!(Locale::from_tag("ID "), None);
    }

    #[test]
    fn default_is_indonesian() {
        assert_eq!(Locale::default(), Locale::Id);
    }

    #[test]
    fn prompt_labels_match_their_own_patterns() {
        for locale in [Locale::Id, Locale::En] {
            let labels = locale.labels();
            let time_line = format!("{}: 30 menit", labels.cooking_time_label);
            let calorie_line = format!("{}: 450 kkal", labels.calories_label);
            assert!(labels.cooking_time_pattern.is_match(&time_line));
            assert!(labels.calories_pattern.is_match(&calorie_line));
        }
    }
}
