//! Recipe record as stored in the recipe data file

use serde::{Deserialize, Serialize};

/// A single dish
///
/// Field names follow the JSON data file (`cookingTime` is camelCase there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique stable identifier, also the URL slug
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free text such as "25 minutes"
    #[serde(default)]
    pub cooking_time: String,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    /// Minutes embedded in `cooking_time`
    ///
    /// Takes the first run of ASCII digits anywhere in the text. Returns
    /// `None` when there are no digits or the number does not fit in `u32`.
    pub fn cooking_minutes(&self) -> Option<u32> {
        first_number(&self.cooking_time)
    }

    /// True if any ingredient, lower-cased, contains `needle`
    ///
    /// `needle` must already be lower-case.
    pub fn has_ingredient_containing(&self, needle: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ing| ing.to_lowercase().contains(needle))
    }
}

/// Parse the first run of ASCII digits in `text`
pub fn first_number(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_time(time: &str) -> Recipe {
        Recipe {
            id: "r".to_string(),
            name: "R".to_string(),
            ingredients: vec![],
            instructions: vec![],
            cooking_time: time.to_string(),
            servings: 1,
            image: String::new(),
        }
    }

    #[test]
    fn test_cooking_minutes_plain() {
        assert_eq!(recipe_with_time("25 minutes").cooking_minutes(), Some(25));
    }

    #[test]
    fn test_cooking_minutes_takes_first_run() {
        assert_eq!(recipe_with_time("about 15-20 mins").cooking_minutes(), Some(15));
        assert_eq!(recipe_with_time("1 hour 30 minutes").cooking_minutes(), Some(1));
    }

    #[test]
    fn test_cooking_minutes_unparsable() {
        assert_eq!(recipe_with_time("abc").cooking_minutes(), None);
        assert_eq!(recipe_with_time("").cooking_minutes(), None);
    }

    #[test]
    fn test_cooking_minutes_overflow_is_none() {
        assert_eq!(recipe_with_time("99999999999 minutes").cooking_minutes(), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "pad-thai",
            "name": "Pad Thai",
            "ingredients": ["rice noodles"],
            "instructions": ["Soak noodles"],
            "cookingTime": "30 minutes",
            "servings": 2,
            "image": "/images/pad-thai.jpg"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.cooking_time, "30 minutes");
        assert_eq!(recipe.servings, 2);

        let back = serde_json::to_value(&recipe).unwrap();
        assert_eq!(back["cookingTime"], "30 minutes");
        assert!(back.get("cooking_time").is_none());
    }

    #[test]
    fn test_has_ingredient_containing_is_case_insensitive() {
        let mut recipe = recipe_with_time("10 minutes");
        recipe.ingredients = vec!["8 oz Spaghetti".to_string()];
        assert!(recipe.has_ingredient_containing("spaghetti"));
        assert!(!recipe.has_ingredient_containing("penne"));
    }
}
