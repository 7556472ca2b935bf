use crate::domain::locale::entities::LabelSet;

pub struct PromptInputs<'a> {
    pub ingredients: &'a str,
    pub cooking_style: Option<&'a str>,
    pub diet_labels: Option<&'a str>,
    pub language: &'a str,
    pub servings: u32,
    pub labels: &'a LabelSet,
}

/// Assembles the single instruction string sent to the generation model.
///
/// Clause order is fixed: style priority (if any), base instruction, diet
/// constraints (if any), language, servings with the round-impractical-
/// quantities policy, then the format template. The template always ends
/// with the two estimate lines, cooking time before calories, carrying the
/// exact labels the line classifier recognizes for the active locale.
pub fn build_recipe_prompt(inputs: &PromptInputs<'_>) -> String {
    let mut prompt = String::new();

    if let Some(style) = inputs.cooking_style {
        prompt.push_str(&format!(
            "Prioritize making a {style} style recipe.\n\n"
        ));
    }

    prompt.push_str(&format!(
        "Based on the following ingredients: {}, create one simple and \
         delicious recipe. Include an appealing recipe title, a list of \
         'Additional Ingredients' if any are needed, and clear 'Preparation \
         Steps'.",
        inputs.ingredients
    ));

    if let Some(labels) = inputs.diet_labels {
        prompt.push_str(&format!(
            "\n\nMANDATORY REQUIREMENTS: this recipe must satisfy the \
             following criteria: {labels}."
        ));
    }

    prompt.push_str(&format!(
        "\n\nIMPORTANT: Write the entire recipe response (title, \
         ingredients, steps) in this language: {}.",
        inputs.language
    ));

    prompt.push_str(&format!(
        "\n\nIMPORTANT: Scale the ingredient quantities specifically for {} \
         servings. Make sure the amounts are sensible and adapt the recipe \
         (for example: do not write '0.1 egg', rework the recipe so it stays \
         practical).",
        inputs.servings
    ));

    prompt.push_str(&format!(
        "\n\nRecipe format:\n\n\
         Recipe Title: [recipe name]\n\
         Servings: {servings} people\n\n\
         Main Ingredients (scaled for {servings} servings):\n\
         [ingredient list with computed quantities]\n\n\
         Preparation Steps:\n\
         [numbered cooking steps]\n\n\
         IMPORTANT: At the very end, also add:\n\n\
         {cooking_time}: [time in minutes]\n\
         {calories}: [calories per serving]",
        servings = inputs.servings,
        cooking_time = inputs.labels.cooking_time_label,
        calories = inputs.labels.calories_label,
    ));

    prompt
}
