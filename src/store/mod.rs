//! In-memory recipe collection, loaded once at startup and read-only afterwards.

pub mod query;
pub mod recipe;

// Re-exports
pub use query::{paginate, search, PageResult, DEFAULT_SEARCH_LIMIT};
pub use recipe::{RawRecipe, Recipe};

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Owns the loaded recipes and answers read-only queries over them
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Load recipes from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading recipes from {:?}", path);

        let file = std::fs::File::open(path).map_err(|e| Error::data_load(path, e.into()))?;
        let store = Self::from_reader(std::io::BufReader::new(file))
            .map_err(|e| Error::data_load(path, e))?;

        info!("Loaded {} recipes from {:?}", store.size(), path);
        Ok(store)
    }

    /// Parse recipes from any JSON byte stream
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Self::from_values(values)
    }

    /// Parse recipes from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Self::from_values(values)
    }

    /// Build a store from already-constructed recipes, renumbering them in order
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let recipes = recipes
            .into_iter()
            .enumerate()
            .map(|(index, recipe)| Recipe { index, ..recipe })
            .collect();

        Self { recipes }
    }

    fn from_values(values: Vec<serde_json::Value>) -> Result<Self> {
        let recipes = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if !value.is_object() {
                    return Err(Error::Validation(format!(
                        "record {index} is not a JSON object"
                    )));
                }
                let raw: RawRecipe = serde_json::from_value(value)
                    .map_err(|e| Error::Validation(format!("record {index}: {e}")))?;
                Ok(raw.into_recipe(index))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { recipes })
    }

    /// Look up a recipe by its ordinal index
    pub fn get_by_id(&self, id: i64) -> Option<&Recipe> {
        usize::try_from(id).ok().and_then(|i| self.recipes.get(i))
    }

    /// Number of loaded recipes
    pub fn size(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// See [`query::paginate`]
    pub fn paginate(&self, page: i64, page_size: usize) -> PageResult<'_> {
        query::paginate(&self.recipes, page, page_size)
    }

    /// See [`query::search`]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Recipe> {
        query::search(&self.recipes, query, limit)
    }
}
