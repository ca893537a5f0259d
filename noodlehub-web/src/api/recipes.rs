//! Recipe API
//!
//! List with filters, single-recipe lookup, similar recipes and the noodle
//! vocabulary. All endpoints are read-only.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use noodlehub_common::{
    find_similar, query, title_case, Criteria, IngredientMatch, Recipe, TimeBound, NOODLE_TYPES,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ApiResult, AppState};

/// Query parameters for GET /api/recipes
///
/// Every parameter is optional. Malformed values never fail the request.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    /// Free text matched against name and ingredients
    pub search: Option<String>,

    /// Prefix matched against the recipe id
    #[serde(rename = "type")]
    pub type_prefix: Option<String>,

    /// Maximum cooking time in minutes; ignored unless it is a whole number
    #[serde(rename = "maxTime")]
    pub max_time: Option<String>,

    /// Comma-separated ingredient terms
    pub ingredients: Option<String>,

    /// `any` (default) or `all`, combining the ingredient terms
    #[serde(rename = "match")]
    pub match_mode: Option<String>,
}

impl RecipeQuery {
    /// Translate request parameters into query criteria
    pub fn to_criteria(&self) -> Criteria {
        let mut criteria = Criteria::new();

        if let Some(search) = &self.search {
            criteria = criteria.with_search(search);
        }
        if let Some(prefix) = &self.type_prefix {
            criteria = criteria.with_type_prefix(prefix);
        }

        if let Some(raw) = self.max_time.as_deref().filter(|v| !v.trim().is_empty()) {
            match TimeBound::parse(raw) {
                TimeBound::Invalid => debug!("Ignoring malformed maxTime '{}'", raw),
                bound => criteria = criteria.with_max_time(bound),
            }
        }

        if let Some(list) = &self.ingredients {
            let mode = match self.match_mode.as_deref() {
                None => IngredientMatch::Any,
                Some(raw) => IngredientMatch::parse(raw).unwrap_or_else(|| {
                    debug!("Unknown ingredient match mode '{}', using 'any'", raw);
                    IngredientMatch::Any
                }),
            };
            criteria = criteria.with_ingredients(list.split(',').map(str::trim), mode);
        }

        criteria
    }
}

/// GET /api/recipes
///
/// Returns the recipes matching the query parameters, in file order.
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeQuery>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let store = state.source.snapshot().await?;
    let criteria = params.to_criteria();

    let found: Vec<Recipe> = query(store.recipes(), &criteria)
        .into_iter()
        .cloned()
        .collect();

    debug!("{} of {} recipes matched {:?}", found.len(), store.len(), params);
    Ok(Json(found))
}

/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Recipe>> {
    let store = state.source.snapshot().await?;
    let recipe = store.require(&id)?;
    Ok(Json(recipe.clone()))
}

/// Similar recipes for one recipe
#[derive(Debug, Serialize)]
pub struct SimilarResponse {
    /// Noodle type shared by the matches, `null` if the recipe has none
    pub category: Option<String>,
    /// Display form of `category` ("Ramen Noodles")
    pub title: Option<String>,
    pub matches: Vec<Recipe>,
}

/// GET /api/recipes/:id/similar
///
/// Other recipes using the same noodle type as `id`.
pub async fn similar_recipes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SimilarResponse>> {
    let store = state.source.snapshot().await?;
    let target = store.require(&id)?;
    let similar = find_similar(target, store.recipes());

    Ok(Json(SimilarResponse {
        category: similar.category.map(str::to_string),
        title: similar.category.map(title_case),
        matches: similar.matches.into_iter().cloned().collect(),
    }))
}

/// GET /api/noodle-types
///
/// The noodle vocabulary in priority order.
pub async fn noodle_types() -> Json<&'static [&'static str]> {
    Json(NOODLE_TYPES)
}
