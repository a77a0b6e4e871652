//! Query resolution.
//!
//! A query is a free-text term plus optional category and area filters.
//! The first matching rule decides the call plan:
//!
//! 1. non-empty term: one name search, filters ignored even when set;
//! 2. category and area both set: category filter, then a detail lookup
//!    for every stub so the area can be matched client-side (the catalog
//!    cannot combine both filters in one call);
//! 3. category or area alone: the matching filter, detail lookups capped
//!    at [`FILTER_DETAIL_CAP`];
//! 4. nothing set: [`RANDOM_SAMPLE_SIZE`] concurrent random draws.
//!
//! A failed detail lookup or random draw drops that candidate and nothing
//! else. Only the branch's first call can fail the whole resolution.

use std::collections::HashSet;

use catalog::{Catalog, CatalogError, Meal, MealStub};
use futures::future::join_all;
use tracing::debug;

/// Detail-lookup cap on the single-filter branches. The combined
/// category+area branch is deliberately uncapped.
pub const FILTER_DETAIL_CAP: usize = 20;

pub const RANDOM_SAMPLE_SIZE: usize = 8;

/// Current search/filter state, exactly as captured from the invocation.
/// Empty strings mean "not set".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryInput {
    pub term: String,
    pub category: String,
    pub area: String,
}

impl QueryInput {
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.category.is_empty() && self.area.is_empty()
    }
}

pub async fn resolve<C>(catalog: &C, input: &QueryInput) -> Result<Vec<Meal>, CatalogError>
where
    C: Catalog + Sync,
{
    let term = input.term.trim();

    if !term.is_empty() {
        debug!(term, "resolving by name search");
        return Ok(dedup_by_id(catalog.search_by_name(term).await?));
    }

    if !input.category.is_empty() && !input.area.is_empty() {
        debug!(
            category = %input.category,
            area = %input.area,
            "resolving by combined filter"
        );
        let stubs = catalog.filter_by_category(&input.category).await?;
        let meals = lookup_stubs(catalog, &stubs).await;

        let matching = meals
            .into_iter()
            .filter(|meal| meal.area.as_deref() == Some(input.area.as_str()))
            .collect();
        return Ok(dedup_by_id(matching));
    }

    if !input.category.is_empty() {
        debug!(category = %input.category, "resolving by category filter");
        let mut stubs = catalog.filter_by_category(&input.category).await?;
        stubs.truncate(FILTER_DETAIL_CAP);

        return Ok(dedup_by_id(lookup_stubs(catalog, &stubs).await));
    }

    if !input.area.is_empty() {
        debug!(area = %input.area, "resolving by area filter");
        let mut stubs = catalog.filter_by_area(&input.area).await?;
        stubs.truncate(FILTER_DETAIL_CAP);

        return Ok(dedup_by_id(lookup_stubs(catalog, &stubs).await));
    }

    debug!("resolving by random sample");
    let draws = join_all((0..RANDOM_SAMPLE_SIZE).map(|_| catalog.random_meal())).await;
    Ok(dedup_by_id(
        draws.into_iter().filter_map(|draw| draw.ok()).collect(),
    ))
}

async fn lookup_stubs<C>(catalog: &C, stubs: &[MealStub]) -> Vec<Meal>
where
    C: Catalog + Sync,
{
    let details = join_all(stubs.iter().map(|stub| catalog.lookup(&stub.id))).await;

    details
        .into_iter()
        .filter_map(|detail| detail.ok().flatten())
        .collect()
}

fn dedup_by_id(meals: Vec<Meal>) -> Vec<Meal> {
    let mut seen = HashSet::new();
    meals
        .into_iter()
        .filter(|meal| seen.insert(meal.id.clone()))
        .collect()
}
