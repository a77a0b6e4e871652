//! Scripted catalog and surface doubles for the unit tests. The catalog
//! records every call so tests can assert on the exact call plan.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use catalog::{Catalog, CatalogError, Meal, MealStub, Result};

use crate::present::{Card, Detail, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Categories,
    Areas,
    Random,
    Search(String),
    FilterCategory(String),
    FilterArea(String),
    Lookup(String),
}

/// Unconfigured operations fail, so `FakeCatalog::new()` doubles as the
/// everything-is-down catalog.
#[derive(Default)]
pub struct FakeCatalog {
    calls: Mutex<Vec<Call>>,
    categories: Option<Vec<String>>,
    areas: Option<Vec<String>>,
    random_meals: Mutex<Vec<Meal>>,
    search_results: Option<Vec<Meal>>,
    category_stubs: Vec<MealStub>,
    area_stubs: Vec<MealStub>,
    lookups: HashMap<String, Meal>,
    failing_lookups: Vec<String>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, names: &[&str]) -> Self {
        self.categories = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    pub fn with_areas(mut self, names: &[&str]) -> Self {
        self.areas = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    /// Meals handed out by successive random draws; once drained, further
    /// draws fail.
    pub fn with_random(self, meals: Vec<Meal>) -> Self {
        *self.random_meals.lock().unwrap() = meals;
        self
    }

    pub fn with_search(mut self, meals: Vec<Meal>) -> Self {
        self.search_results = Some(meals);
        self
    }

    pub fn with_category_stubs(mut self, stubs: Vec<MealStub>) -> Self {
        self.category_stubs = stubs;
        self
    }

    pub fn with_area_stubs(mut self, stubs: Vec<MealStub>) -> Self {
        self.area_stubs = stubs;
        self
    }

    pub fn with_lookup(mut self, meal: Meal) -> Self {
        self.lookups.insert(meal.id.clone(), meal);
        self
    }

    pub fn with_failing_lookup(mut self, id: &str) -> Self {
        self.failing_lookups.push(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Lookup(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn categories(&self) -> Result<Vec<String>> {
        self.record(Call::Categories);
        self.categories.clone().ok_or(CatalogError::Empty)
    }

    async fn areas(&self) -> Result<Vec<String>> {
        self.record(Call::Areas);
        self.areas.clone().ok_or(CatalogError::Empty)
    }

    async fn random_meal(&self) -> Result<Meal> {
        self.record(Call::Random);
        let mut meals = self.random_meals.lock().unwrap();
        if meals.is_empty() {
            Err(CatalogError::Empty)
        } else {
            Ok(meals.remove(0))
        }
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Meal>> {
        self.record(Call::Search(term.to_string()));
        self.search_results.clone().ok_or(CatalogError::Empty)
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealStub>> {
        self.record(Call::FilterCategory(category.to_string()));
        Ok(self.category_stubs.clone())
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealStub>> {
        self.record(Call::FilterArea(area.to_string()));
        Ok(self.area_stubs.clone())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Meal>> {
        self.record(Call::Lookup(id.to_string()));
        if self.failing_lookups.iter().any(|failing| failing == id) {
            return Err(CatalogError::Empty);
        }
        Ok(self.lookups.get(id).cloned())
    }
}

pub fn meal(id: &str, name: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        thumb: format!("https://example.test/{id}.jpg"),
        category: None,
        area: None,
        tags: None,
        instructions: None,
        ingredients: Vec::new(),
    }
}

pub fn meal_in_area(id: &str, name: &str, area: &str) -> Meal {
    let mut meal = meal(id, name);
    meal.area = Some(area.to_string());
    meal
}

pub fn stub(id: &str, name: &str) -> MealStub {
    MealStub {
        id: id.to_string(),
        name: name.to_string(),
        thumb: format!("https://example.test/{id}.jpg"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    Loading(String),
    Cards(Vec<String>),
    Detail(String),
    NoResults,
    Error(String),
}

#[derive(Default)]
pub struct FakeSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Surface for FakeSurface {
    fn loading(&self, message: &str) {
        self.push(SurfaceEvent::Loading(message.to_string()));
    }

    fn cards(&self, cards: &[Card]) {
        self.push(SurfaceEvent::Cards(
            cards.iter().map(|card| card.id.clone()).collect(),
        ));
    }

    fn detail(&self, detail: &Detail) {
        self.push(SurfaceEvent::Detail(detail.name.clone()));
    }

    fn no_results(&self) {
        self.push(SurfaceEvent::NoResults);
    }

    fn error(&self, message: &str) {
        self.push(SurfaceEvent::Error(message.to_string()));
    }
}
