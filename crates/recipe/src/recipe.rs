use serde::{Deserialize, Serialize};

use crate::IngredientSpec;

/// A recipe document as stored inside a weekly plan.
///
/// Display-only fields the aggregation path never reads (image URLs, cook
/// times added by newer clients) are tolerated and dropped on ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientSpec>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
