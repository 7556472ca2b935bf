pub mod analyze_ingredients;
pub mod generate_recipe;
