use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Every catalog endpoint wraps its payload in a `meals` array, which may
/// be `null` or missing entirely when there is nothing to return.
#[derive(Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub category: String,
}

#[derive(Deserialize)]
pub struct AreaEntry {
    #[serde(rename = "strArea")]
    pub area: String,
}

/// Full meal record as the catalog serves it. The twenty numbered
/// ingredient/measure columns land in `slots` and are resolved into an
/// ordered list when the record is turned into a [`crate::Meal`].
#[derive(Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal")]
    pub name: String,

    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,

    #[serde(rename = "strCategory")]
    pub category: Option<String>,

    #[serde(rename = "strArea")]
    pub area: Option<String>,

    #[serde(rename = "strTags")]
    pub tags: Option<String>,

    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,

    #[serde(flatten)]
    pub slots: BTreeMap<String, Value>,
}
