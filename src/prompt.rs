//! Fixed instructional prompt sent to the inference provider.

/// System-level instruction, constant across all requests and never
/// user-controllable.
const SYSTEM_PROMPT: &str = "You are an assistant that receives a list of ingredients that a user has and suggests a recipe they could make with some or all of those ingredients. You don't need to use every ingredient they mention in your recipe. The recipe can include additional ingredients they didn't mention, but try not to include too many extra ingredients. Format your response in markdown to make it easier to render to a web page.";

/// Join ingredient values with ", " in their original order. String elements
/// are used verbatim; anything else keeps its JSON rendering so the join
/// never fails.
pub fn join_ingredients(ingredients: &[serde_json::Value]) -> String {
    ingredients
        .iter()
        .map(|item| match item.as_str() {
            Some(s) => s.to_string(),
            None => item.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Embed the joined ingredient list into the instructional template.
pub fn build_prompt(joined_ingredients: &str) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\nUser: I have {joined_ingredients}. Please give me a recipe you'd recommend!\nAssistant:\n"
    )
}
