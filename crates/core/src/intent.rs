use crate::models::{Category, GuidanceResponse};

/// Case-folds the query. Whitespace and punctuation are left untouched.
pub fn normalize_query(input: &str) -> String {
    input.to_lowercase()
}

/// First-match-wins over `Category::ALL`. Delay outranks cancellation, which
/// outranks weather; anything else is `General`.
pub fn classify_category(text: &str) -> Category {
    let lower = normalize_query(text);

    Category::ALL
        .into_iter()
        .find(|category| contains_any(&lower, category.triggers()))
        .unwrap_or(Category::General)
}

pub fn classify_and_respond(text: &str) -> GuidanceResponse {
    classify_category(text).response()
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
