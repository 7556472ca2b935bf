/// Fallback title when the generated text yields nothing usable.
pub const UNTITLED_RECIPE: &str = "Resep Tanpa Judul";

/// Derives a history title from generated recipe text: the first non-empty
/// line with any leading `#`-run and whitespace stripped.
pub fn derive_title(recipe_text: &str) -> String {
    recipe_text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED_RECIPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_becomes_the_title() {
        assert_eq!(derive_title("Nasi Goreng\n- nasi"), "Nasi Goreng");
    }

    #[test]
    fn leading_hashes_are_stripped() {
        assert_eq!(derive_title("## Nasi Goreng Spesial\nisi"), "Nasi Goreng Spesial");
        assert_eq!(derive_title("#Judul"), "Judul");
    }

    #[test]
    fn skips_leading_blank_lines() {
        assert_eq!(derive_title("\n\n  \nRendang\n"), "Rendang");
    }

    #[test]
    fn falls_back_to_placeholder() {
        assert_eq!(derive_title(""), UNTITLED_RECIPE);
        assert_eq!(derive_title("\n\n"), UNTITLED_RECIPE);
        assert_eq!(derive_title("###"), UNTITLED_RECIPE);
    }
}
