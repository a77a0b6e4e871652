//! Filter options offered to the user.
//!
//! Both lists come from the catalog once at startup. When a list call
//! fails or comes back empty the fixed fallback below is used instead, so
//! filtering keeps working without the taxonomy endpoints.

use catalog::Catalog;
use tracing::warn;

pub const ALL_CATEGORIES: &str = "All categories";
pub const ALL_AREAS: &str = "All areas";

pub const FALLBACK_CATEGORIES: [&str; 8] = [
    "Beef",
    "Chicken",
    "Dessert",
    "Lamb",
    "Pasta",
    "Pork",
    "Seafood",
    "Vegetarian",
];

pub const FALLBACK_AREAS: [&str; 9] = [
    "American",
    "British",
    "Chinese",
    "French",
    "Indian",
    "Italian",
    "Japanese",
    "Mexican",
    "Spanish",
];

/// One entry in a filter list. The empty value is the "no filter"
/// sentinel that heads every list.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Taxonomy {
    pub categories: Vec<FilterOption>,
    pub areas: Vec<FilterOption>,
}

impl Taxonomy {
    pub async fn load<C>(catalog: &C) -> Self
    where
        C: Catalog + Sync,
    {
        let (categories, areas) = tokio::join!(catalog.categories(), catalog.areas());

        let categories = categories.unwrap_or_else(|err| {
            warn!("Falling back to static categories: {err}");
            owned(&FALLBACK_CATEGORIES)
        });
        let areas = areas.unwrap_or_else(|err| {
            warn!("Falling back to static areas: {err}");
            owned(&FALLBACK_AREAS)
        });

        Self {
            categories: with_sentinel(ALL_CATEGORIES, categories),
            areas: with_sentinel(ALL_AREAS, areas),
        }
    }

    pub fn known_category(&self, value: &str) -> bool {
        self.categories.iter().any(|option| option.value == value)
    }

    pub fn known_area(&self, value: &str) -> bool {
        self.areas.iter().any(|option| option.value == value)
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn with_sentinel(label: &str, names: Vec<String>) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        label: label.to_string(),
        value: String::new(),
    }];

    options.extend(names.into_iter().map(|name| FilterOption {
        label: name.clone(),
        value: name,
    }));

    options
}
