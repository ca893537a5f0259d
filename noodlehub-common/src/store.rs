//! Static recipe store
//!
//! Recipes come from a JSON array on disk. The store is immutable once
//! loaded; [`RecipeSource`] decides whether it is loaded once at startup or
//! re-read for every request.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::model::Recipe;
use crate::{Error, Result};

/// Immutable, id-unique recipe collection in file order
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store, rejecting duplicate ids
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(Error::DuplicateId(recipe.id.clone()));
            }
        }
        Ok(Self { recipes })
    }

    /// Parse a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::from_recipes(recipes)
    }

    /// Read and parse the recipe file at `path`
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::DataSource {
                path: path.to_path_buf(),
                source,
            })?;
        let store = Self::from_json_str(&raw)?;
        debug!("Loaded {} recipes from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Exact id lookup
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Like [`get`](Self::get) but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&Recipe> {
        self.get(id)
            .ok_or_else(|| Error::NotFound(format!("recipe '{}'", id)))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Where request handlers get their recipes from
#[derive(Debug, Clone)]
pub enum RecipeSource {
    /// Loaded once, shared for the life of the process
    Cached(Arc<RecipeStore>),
    /// File re-read on every request
    Reload(PathBuf),
}

impl RecipeSource {
    /// Load `path` once and serve it from memory
    pub async fn cached(path: &Path) -> Result<Self> {
        Ok(Self::Cached(Arc::new(RecipeStore::load(path).await?)))
    }

    /// Current recipe collection
    pub async fn snapshot(&self) -> Result<Arc<RecipeStore>> {
        match self {
            Self::Cached(store) => Ok(Arc::clone(store)),
            Self::Reload(path) => Ok(Arc::new(RecipeStore::load(path).await?)),
        }
    }

    /// Short label for logs and health output
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Cached(_) => "cached",
            Self::Reload(_) => "reload",
        }
    }
}

impl From<RecipeStore> for RecipeSource {
    fn from(store: RecipeStore) -> Self {
        Self::Cached(Arc::new(store))
    }
}
