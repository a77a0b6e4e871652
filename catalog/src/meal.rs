use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::MealRecord;

/// Number of ingredient/measure column pairs in the catalog's meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// Shown when an ingredient has no usable measure.
pub const MEASURE_FALLBACK: &str = "as needed";

/// A fully resolved meal. Built once from the wire record; the numbered
/// ingredient columns are already collapsed into `ingredients`, in slot
/// order, so nothing downstream has to know about the column scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumb: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Partial record returned by the filter endpoints. Carries just enough
/// to draw a card; everything else needs a follow-up lookup.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MealStub {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal")]
    pub name: String,

    #[serde(rename = "strMealThumb")]
    pub thumb: String,
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        let ingredients = parse_slots(&record.slots);

        Self {
            id: record.id,
            name: record.name,
            thumb: record.thumb.unwrap_or_default(),
            category: record.category,
            area: record.area,
            tags: record.tags,
            instructions: record.instructions,
            ingredients,
        }
    }
}

fn parse_slots(slots: &BTreeMap<String, Value>) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();

    for slot in 1..=INGREDIENT_SLOTS {
        let Some(name) = slot_value(slots, "strIngredient", slot) else {
            continue;
        };

        let measure = slot_value(slots, "strMeasure", slot)
            .unwrap_or_else(|| MEASURE_FALLBACK.to_string());

        ingredients.push(Ingredient { name, measure });
    }

    ingredients
}

fn slot_value(slots: &BTreeMap<String, Value>, prefix: &str, slot: usize) -> Option<String> {
    slots
        .get(&format!("{prefix}{slot}"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
