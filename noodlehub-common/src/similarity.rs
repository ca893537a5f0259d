//! Similar-recipe matching by noodle type

use serde::Serialize;

use crate::model::Recipe;
use crate::vocabulary::NOODLE_TYPES;

/// Outcome of [`find_similar`]
///
/// `category` is `None` for recipes without a known noodle type; `matches`
/// is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Similar<'a> {
    pub category: Option<&'static str>,
    pub matches: Vec<&'a Recipe>,
}

/// Primary noodle type of `recipe`
///
/// The first vocabulary entry found in any ingredient wins, regardless of
/// where in the ingredient list it occurs.
pub fn classify(recipe: &Recipe) -> Option<&'static str> {
    let lowered: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|ing| ing.to_lowercase())
        .collect();

    NOODLE_TYPES
        .iter()
        .copied()
        .find(|noodle| lowered.iter().any(|ing| ing.contains(*noodle)))
}

/// Other recipes in `all` that use the same noodle type as `target`
pub fn find_similar<'a, I>(target: &Recipe, all: I) -> Similar<'a>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let Some(category) = classify(target) else {
        return Similar {
            category: None,
            matches: Vec::new(),
        };
    };

    let matches = all
        .into_iter()
        .filter(|recipe| recipe.id != target.id && recipe.has_ingredient_containing(category))
        .collect();

    Similar {
        category: Some(category),
        matches,
    }
}

/// Capitalize each word: "ramen noodles" -> "Ramen Noodles"
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
