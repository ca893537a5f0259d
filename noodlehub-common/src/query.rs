//! Recipe query service
//!
//! Narrows a recipe collection by optional criteria. Every supplied criterion
//! is a further restriction; absent or empty criteria do nothing. Matching is
//! case-insensitive substring containment and the input order is preserved.

use crate::model::Recipe;

/// How a multi-term ingredient selection is combined
///
/// There is no default: callers pick a mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientMatch {
    /// At least one selected term appears in some ingredient (list page behavior)
    Any,
    /// Every selected term appears in some ingredient
    All,
}

impl IngredientMatch {
    /// Parse `any` / `all` (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "any" | "or" => Some(Self::Any),
            "all" | "and" => Some(Self::All),
            _ => None,
        }
    }
}

/// Upper bound on cooking time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    Minutes(u32),
    /// The bound was supplied but is not a number; nothing passes it
    Invalid,
}

impl TimeBound {
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse()
            .map(Self::Minutes)
            .unwrap_or(Self::Invalid)
    }

    fn admits(self, recipe: &Recipe) -> bool {
        match (self, recipe.cooking_minutes()) {
            (Self::Minutes(bound), Some(minutes)) => minutes <= bound,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IngredientFilter {
    terms: Vec<String>,
    mode: IngredientMatch,
}

/// Filter criteria for [`query`]
///
/// `Criteria::default()` has no criteria and matches every recipe. Text is
/// lower-cased once when the criterion is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    type_prefix: Option<String>,
    search: Option<String>,
    max_time: Option<TimeBound>,
    ingredients: Option<IngredientFilter>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep recipes whose id starts with `prefix`
    pub fn with_type_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.type_prefix = non_empty_lower(prefix.as_ref());
        self
    }

    /// Keep recipes whose name or any ingredient contains `text`
    pub fn with_search(mut self, text: impl AsRef<str>) -> Self {
        self.search = non_empty_lower(text.as_ref());
        self
    }

    /// Keep recipes cooking in at most `bound`
    pub fn with_max_time(mut self, bound: TimeBound) -> Self {
        self.max_time = Some(bound);
        self
    }

    /// Keep recipes containing the selected ingredient terms per `mode`
    ///
    /// Blank terms are dropped; an empty selection clears the criterion.
    pub fn with_ingredients<I, S>(mut self, terms: I, mode: IngredientMatch) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .filter_map(|t| non_empty_lower(t.as_ref()))
            .collect();
        self.ingredients = if terms.is_empty() {
            None
        } else {
            Some(IngredientFilter { terms, mode })
        };
        self
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.type_prefix.is_none()
            && self.search.is_none()
            && self.max_time.is_none()
            && self.ingredients.is_none()
    }

    /// Whether `recipe` satisfies every active criterion
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(prefix) = &self.type_prefix {
            if !recipe.id.to_lowercase().starts_with(prefix.as_str()) {
                return false;
            }
        }

        if let Some(text) = &self.search {
            if !recipe.name.to_lowercase().contains(text.as_str())
                && !recipe.has_ingredient_containing(text)
            {
                return false;
            }
        }

        if let Some(bound) = self.max_time {
            if !bound.admits(recipe) {
                return false;
            }
        }

        if let Some(filter) = &self.ingredients {
            let mut hits = filter
                .terms
                .iter()
                .map(|term| recipe.has_ingredient_containing(term));
            let ok = match filter.mode {
                IngredientMatch::Any => hits.any(|hit| hit),
                IngredientMatch::All => hits.all(|hit| hit),
            };
            if !ok {
                return false;
            }
        }

        true
    }
}

fn non_empty_lower(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

/// Recipes from `recipes` satisfying `criteria`, in input order
pub fn query<'a, I>(recipes: I, criteria: &Criteria) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| criteria.matches(recipe))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str, ingredients: &[&str], time: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec!["Cook.".to_string()],
            cooking_time: time.to_string(),
            servings: 2,
            image: format!("/images/{id}.jpg"),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("pad-thai", "Pad Thai", &["8 oz rice noodles", "2 eggs", "peanuts"], "30 minutes"),
            recipe("garlic-noodles", "Garlic Noodles", &["egg noodles", "butter"], "15 minutes"),
            recipe("spaghetti-aglio", "Spaghetti Aglio e Olio", &["1 lb spaghetti", "3 cloves garlic"], "20 minutes"),
            recipe("thai-pad-noodles", "Thai Pad Noodles", &["rice noodles", "basil"], "25 minutes"),
            recipe("mystery-bowl", "Mystery Bowl", &["ramen noodles"], "abc"),
            recipe("mac-and-cheese", "Mac and Cheese", &["2 cups elbow macaroni", "1 cup cheese"], "25 minutes"),
        ]
    }

    fn ids(found: &[&Recipe]) -> Vec<String> {
        found.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new());
        assert_eq!(found.len(), recipes.len());
        for (a, b) in found.iter().zip(recipes.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_empty_values_are_no_ops() {
        let recipes = sample();
        let criteria = Criteria::new()
            .with_search("")
            .with_type_prefix("   ")
            .with_ingredients(Vec::<String>::new(), IngredientMatch::All);
        assert!(criteria.is_empty());
        assert_eq!(query(&recipes, &criteria).len(), recipes.len());
    }

    #[test]
    fn test_type_prefix_matches_start_of_id_only() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new().with_type_prefix("pad"));
        assert_eq!(ids(&found), vec!["pad-thai"]);
    }

    #[test]
    fn test_type_prefix_is_case_insensitive() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new().with_type_prefix("PAD"));
        assert_eq!(ids(&found), vec!["pad-thai"]);
    }

    #[test]
    fn test_search_matches_name_and_ingredients() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new().with_search("GARLIC"));
        assert_eq!(ids(&found), vec!["garlic-noodles", "spaghetti-aglio"]);
    }

    #[test]
    fn test_max_time_excludes_longer_and_unparsable() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new().with_max_time(TimeBound::Minutes(20)));
        assert_eq!(ids(&found), vec!["garlic-noodles", "spaghetti-aglio"]);
        assert!(!ids(&found).contains(&"mystery-bowl".to_string()));
    }

    #[test]
    fn test_max_time_bound_is_inclusive() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new().with_max_time(TimeBound::Minutes(25)));
        assert_eq!(
            ids(&found),
            vec!["garlic-noodles", "spaghetti-aglio", "thai-pad-noodles", "mac-and-cheese"]
        );
    }

    #[test]
    fn test_invalid_time_bound_matches_nothing() {
        let recipes = sample();
        let bound = TimeBound::parse("soon");
        assert_eq!(bound, TimeBound::Invalid);
        assert!(query(&recipes, &Criteria::new().with_max_time(bound)).is_empty());
    }

    #[test]
    fn test_time_bound_parse() {
        assert_eq!(TimeBound::parse(" 45 "), TimeBound::Minutes(45));
        assert_eq!(TimeBound::parse("-5"), TimeBound::Invalid);
        assert_eq!(TimeBound::parse(""), TimeBound::Invalid);
    }

    #[test]
    fn test_ingredients_any() {
        let recipes = sample();
        let criteria = Criteria::new()
            .with_ingredients(["Spaghetti", "elbow macaroni"], IngredientMatch::Any);
        let found = query(&recipes, &criteria);
        assert_eq!(ids(&found), vec!["spaghetti-aglio", "mac-and-cheese"]);
    }

    #[test]
    fn test_ingredients_all() {
        let recipes = sample();
        let criteria =
            Criteria::new().with_ingredients(["rice noodles", "basil"], IngredientMatch::All);
        let found = query(&recipes, &criteria);
        assert_eq!(ids(&found), vec!["thai-pad-noodles"]);

        let any = Criteria::new().with_ingredients(["rice noodles", "basil"], IngredientMatch::Any);
        assert_eq!(ids(&query(&recipes, &any)), vec!["pad-thai", "thai-pad-noodles"]);
    }

    #[test]
    fn test_ingredient_match_parse() {
        assert_eq!(IngredientMatch::parse("ANY"), Some(IngredientMatch::Any));
        assert_eq!(IngredientMatch::parse("all"), Some(IngredientMatch::All));
        assert_eq!(IngredientMatch::parse("most"), None);
    }

    #[test]
    fn test_composition_equals_conjunction() {
        let recipes = sample();
        let c1 = Criteria::new().with_search("noodles");
        let c2 = Criteria::new().with_max_time(TimeBound::Minutes(25));
        let both = Criteria::new()
            .with_search("noodles")
            .with_max_time(TimeBound::Minutes(25));

        let staged = query(query(&recipes, &c1), &c2);
        let combined = query(&recipes, &both);
        assert_eq!(staged, combined);

        let reversed = query(query(&recipes, &c2), &c1);
        assert_eq!(reversed, combined);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let recipes = sample();
        let found = query(&recipes, &Criteria::new().with_search("e"));
        let mut cursor = recipes.iter();
        for hit in found {
            assert!(cursor.any(|r| r == hit), "{} out of order", hit.id);
        }
    }
}
