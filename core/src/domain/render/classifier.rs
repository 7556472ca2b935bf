use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    locale::entities::LabelSet,
    render::entities::{DisplayElement, FactKind},
};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)$").expect("valid pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("valid pattern"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("valid pattern"));
static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("valid pattern"));
static BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][^:]*:").expect("valid pattern"));

/// Splits generated text on line feeds and classifies every line
/// independently. Tolerant by construction: any input produces exactly one
/// element per line, in input order.
pub fn classify_text(text: &str, labels: &LabelSet) -> Vec<DisplayElement> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| classify_line(line, index == 0, labels))
        .collect()
}

/// Ordered, line-local classification; first match wins. The localized
/// estimate-line patterns come from the caller so the active locale decides
/// what counts as a labeled fact.
pub fn classify_line(line: &str, is_first_line: bool, labels: &LabelSet) -> DisplayElement {
    if labels.cooking_time_pattern.is_match(line) {
        return DisplayElement::LabeledFact {
            kind: FactKind::CookingTime,
            text: line.to_string(),
        };
    }

    if labels.calories_pattern.is_match(line) {
        return DisplayElement::LabeledFact {
            kind: FactKind::Calories,
            text: line.to_string(),
        };
    }

    // A marked heading, or an unmarked first line that is not list-like.
    // The latter deliberately treats a first-line paragraph as the recipe
    // title, matching how generated recipes actually open.
    if let Some(caps) = HEADING.captures(line) {
        return DisplayElement::Heading {
            text: caps[2].trim().to_string(),
        };
    }
    if is_first_line && !line.trim().is_empty() && !looks_like_list_item(line) {
        return DisplayElement::Heading {
            text: line.trim().to_string(),
        };
    }

    if let Some(caps) = BULLET.captures(line) {
        return DisplayElement::BulletItem {
            text: caps[1].trim().to_string(),
        };
    }

    if let Some(caps) = NUMBERED.captures(line) {
        return DisplayElement::NumberedItem {
            text: caps[1].trim().to_string(),
        };
    }

    if BOLD_LABEL.is_match(line) {
        return DisplayElement::BoldLabel {
            text: line.to_string(),
        };
    }

    if !line.trim().is_empty() {
        return DisplayElement::Paragraph {
            text: line.to_string(),
        };
    }

    DisplayElement::Blank
}

fn looks_like_list_item(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('*') || NUMBERED_PREFIX.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::entities::Locale;

    fn labels_id() -> &'static LabelSet {
        Locale::Id.labels()
    }

    fn labels_en() -> &'static LabelSet {
        Locale::En.labels()
    }

    #[test]
    fn one_element_per_line_in_order() {
        let text = "Nasi Goreng Spesial\n\nBahan Utama:\n- nasi\n- telur\n\nLangkah-langkah Pembuatan:\n1. Panaskan minyak.\n2. Masukkan nasi.\n\nEstimasi Waktu Memasak: 15 menit\nEstimasi Jumlah Kalori: 420 kkal";
        let elements = classify_text(text, labels_id());
        assert_eq!(elements.len(), text.split('\n').count());

        assert_eq!(
            elements[0],
            DisplayElement::Heading {
                text: "Nasi Goreng Spesial".to_string()
            }
        );
        assert_eq!(elements[1], DisplayElement::Blank);
        assert_eq!(
            elements[2],
            DisplayElement::BoldLabel {
                text: "Bahan Utama:".to_string()
            }
        );
        assert_eq!(
            elements[3],
            DisplayElement::BulletItem {
                text: "nasi".to_string()
            }
        );
        assert_eq!(
            elements[7],
            DisplayElement::NumberedItem {
                text: "Panaskan minyak.".to_string()
            }
        );
        assert_eq!(
            elements[10],
            DisplayElement::LabeledFact {
                kind: FactKind::CookingTime,
                text: "Estimasi Waktu Memasak: 15 menit".to_string()
            }
        );
        assert_eq!(
            elements[11],
            DisplayElement::LabeledFact {
                kind: FactKind::Calories,
                text: "Estimasi Jumlah Kalori: 420 kkal".to_string()
            }
        );
    }

    #[test]
    fn heading_strips_any_hash_run() {
        for run in 1..=6 {
            let line = format!("{} Rendang Daging", "#".repeat(run));
            let element = classify_line(&line, false, labels_id());
            assert_eq!(
                element,
                DisplayElement::Heading {
                    text: "Rendang Daging".to_string()
                }
            );
        }
    }

    #[test]
    fn both_bullet_markers_are_equivalent() {
        let dash = classify_line("- santan kental", false, labels_id());
        let star = classify_line("* santan kental", false, labels_id());
        assert_eq!(dash, star);
        assert_eq!(
            dash,
            DisplayElement::BulletItem {
                text: "santan kental".to_string()
            }
        );
    }

    #[test]
    fn unmarked_first_line_is_a_heading() {
        let element = classify_line("Soto Ayam Bening", true, labels_id());
        assert_eq!(
            element,
            DisplayElement::Heading {
                text: "Soto Ayam Bening".to_string()
            }
        );
    }

    #[test]
    fn list_like_first_line_is_not_a_heading() {
        assert_eq!(
            classify_line("- bawang putih", true, labels_id()),
            DisplayElement::BulletItem {
                text: "bawang putih".to_string()
            }
        );
        assert_eq!(
            classify_line("1. Iris bawang.", true, labels_id()),
            DisplayElement::NumberedItem {
                text: "Iris bawang.".to_string()
            }
        );
    }

    #[test]
    fn fact_labels_follow_the_supplied_locale() {
        let line = "Cooking Time: 25 minutes";
        assert_eq!(
            classify_line(line, false, labels_en()),
            DisplayElement::LabeledFact {
                kind: FactKind::CookingTime,
                text: line.to_string()
            }
        );
        // The Indonesian label set does not recognize the English line;
        // it degrades to a bold label, never an error.
        assert_eq!(
            classify_line(line, false, labels_id()),
            DisplayElement::BoldLabel {
                text: line.to_string()
            }
        );
    }

    #[test]
    fn fact_labels_match_case_insensitively() {
        let line = "ESTIMASI WAKTU MEMASAK: 10 menit";
        assert_eq!(
            classify_line(line, false, labels_id()),
            DisplayElement::LabeledFact {
                kind: FactKind::CookingTime,
                text: line.to_string()
            }
        );
    }

    #[test]
    fn fact_lines_win_over_bold_labels() {
        // "Estimated Calories: ..." also matches the capitalized-label rule;
        // the fact rule runs first.
        assert_eq!(
            classify_line("Estimated Calories: 300", false, labels_en()),
            DisplayElement::LabeledFact {
                kind: FactKind::Calories,
                text: "Estimated Calories: 300".to_string()
            }
        );
    }

    #[test]
    fn arbitrary_text_never_fails() {
        let text = "::::\n####\n123\n  \n- \n#x\n%%%";
        let elements = classify_text(text, labels_id());
        assert_eq!(elements.len(), 7);
        // "#x" has no whitespace after the run, so it is not a heading.
        assert_eq!(
            elements[5],
            DisplayElement::Paragraph {
                text: "#x".to_string()
            }
        );
    }

    #[test]
    fn blank_and_whitespace_lines_are_blank() {
        assert_eq!(classify_line("", false, labels_id()), DisplayElement::Blank);
        assert_eq!(
            classify_line("   ", false, labels_id()),
            DisplayElement::Blank
        );
    }
}
