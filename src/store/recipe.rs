use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Unknown Recipe";
pub const DEFAULT_URL: &str = "#";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// A recipe as held in memory.
///
/// `index` is the ordinal position in the loaded collection and doubles as
/// the public identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub index: usize,
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub ingredients: Vec<String>,
    pub method: Vec<String>,
}

/// A record as it appears in the source file.
///
/// Every field is optional; `null` is treated like a missing key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecipe {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "url", default)]
    pub url: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Ingredients", default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(rename = "Method", default)]
    pub method: Option<Vec<String>>,
}

impl RawRecipe {
    /// Apply defaults and assign the ordinal index
    pub fn into_recipe(self, index: usize) -> Recipe {
        Recipe {
            index,
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            url: self.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            ingredients: self.ingredients.unwrap_or_default(),
            method: self.method.unwrap_or_default(),
        }
    }
}

impl Recipe {
    /// Placeholder image for this recipe, addressed by its index
    pub fn thumbnail_url(&self, base_url: &str) -> String {
        crate::utils::thumbnail_url(base_url, self.index)
    }
}
