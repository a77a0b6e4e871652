//! Data model and HTTP client for a public recipe catalog.
//!
//! The catalog speaks JSON over plain GET endpoints. This crate owns the
//! wire DTOs, the resolved [`Meal`] domain type, and the [`CatalogClient`]
//! that performs the calls. Everything else in the workspace consumes the
//! [`Catalog`] trait.

pub mod client;
pub mod error;
pub mod meal;
pub mod models;

pub use client::{Catalog, CatalogClient, DEFAULT_BASE_URL};
pub use error::{CatalogError, Result};
pub use meal::{Ingredient, Meal, MealStub, INGREDIENT_SLOTS, MEASURE_FALLBACK};
