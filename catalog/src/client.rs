//! # Catalog client
//!
//! Thin typed wrapper over the public recipe catalog's read endpoints.
//!
//! ## Endpoints
//! - `list.php?c=list` / `list.php?a=list`: category and area taxonomy
//! - `random.php`: one random meal
//! - `search.php?s=`: full meal records matching a name
//! - `filter.php?c=` / `filter.php?a=`: partial records (id, name, thumb)
//! - `lookup.php?i=`: one full record by id
//!
//! Bodies are fetched as text and decoded with `serde_json` afterwards,
//! so a transport failure and a malformed body stay distinguishable.
//!
//! A `null` or missing `meals` array means "nothing matched". The list
//! and random endpoints promise a value, so an empty array from them is
//! reported as [`CatalogError::Empty`] and the caller decides how to
//! degrade. Search, filter and lookup treat it as an ordinary empty
//! result.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::meal::{Meal, MealStub};
use crate::models::{AreaEntry, CategoryEntry, MealRecord, MealsEnvelope};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Read operations the rest of the app depends on. Consumers take this
/// trait, not [`CatalogClient`], so resolution logic stays independent of
/// the transport.
#[async_trait]
pub trait Catalog {
    async fn categories(&self) -> Result<Vec<String>>;
    async fn areas(&self) -> Result<Vec<String>>;
    async fn random_meal(&self) -> Result<Meal>;
    async fn search_by_name(&self, term: &str) -> Result<Vec<Meal>>;
    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealStub>>;
    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealStub>>;
    async fn lookup(&self, id: &str) -> Result<Option<Meal>>;
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.get(url).query(query).send().await?;
        let body = response.error_for_status()?.text().await?;

        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn categories(&self) -> Result<Vec<String>> {
        let entries: Vec<CategoryEntry> = self.fetch("list.php", &[("c", "list")]).await?;

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(entries.into_iter().map(|entry| entry.category).collect())
    }

    async fn areas(&self) -> Result<Vec<String>> {
        let entries: Vec<AreaEntry> = self.fetch("list.php", &[("a", "list")]).await?;

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(entries.into_iter().map(|entry| entry.area).collect())
    }

    async fn random_meal(&self) -> Result<Meal> {
        let records: Vec<MealRecord> = self.fetch("random.php", &[]).await?;

        records
            .into_iter()
            .next()
            .map(Meal::from)
            .ok_or(CatalogError::Empty)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Meal>> {
        let records: Vec<MealRecord> = self.fetch("search.php", &[("s", term)]).await?;
        Ok(records.into_iter().map(Meal::from).collect())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealStub>> {
        self.fetch("filter.php", &[("c", category)]).await
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealStub>> {
        self.fetch("filter.php", &[("a", area)]).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<Meal>> {
        let records: Vec<MealRecord> = self.fetch("lookup.php", &[("i", id)]).await?;
        Ok(records.into_iter().next().map(Meal::from))
    }
}
