//! Recipe catalog browser.
//!
//! Queries a public recipe catalog and turns search/filter input into
//! result cards and a full-detail view.
//!
//! # Structure
//!
//! - [`resolve`]: decides which catalog calls a query needs and
//!   assembles the deduplicated result list
//! - [`present`]: view models plus the [`present::Surface`] trait the
//!   renderer implements
//! - [`taxonomy`]: category/area filter options, loaded once with a
//!   static fallback
//! - [`state`]: config, HTTP client and taxonomy wired together at
//!   startup
//!
//! The binary in `main.rs` maps subcommands onto [`browse`] and [`show`]
//! and draws to the terminal. Failures never unwind past these entry
//! points; they end as a message on the surface.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod present;
pub mod resolve;
pub mod state;
pub mod taxonomy;

#[cfg(test)]
mod testutil;

use catalog::Catalog;
use present::{Card, Surface};

pub use error::AppError;
pub use resolve::QueryInput;
pub use state::State;

pub fn init_tracing() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
}

/// Resolve a query and hand the outcome to the surface: cards for a
/// non-empty result, the no-results view for an empty one, an error
/// message when the primary call failed.
pub async fn browse<C>(catalog: &C, input: &QueryInput, surface: &dyn Surface)
where
    C: Catalog + Sync,
{
    surface.loading(if input.is_empty() {
        "Loading random recipes..."
    } else {
        "Searching recipes..."
    });

    match resolve::resolve(catalog, input).await {
        Ok(meals) if meals.is_empty() => surface.no_results(),
        Ok(meals) => {
            let cards: Vec<Card> = meals.iter().map(present::card).collect();
            surface.cards(&cards);
        }
        Err(err) => {
            warn!("query resolution failed: {err}");
            surface.error("Could not fetch recipes. Please try again.");
        }
    }
}

/// Fetch one meal by id and show its full detail view.
pub async fn show<C>(catalog: &C, id: &str, surface: &dyn Surface)
where
    C: Catalog + Sync,
{
    surface.loading("Loading recipe...");

    match fetch_detail(catalog, id).await {
        Ok(detail) => surface.detail(&detail),
        Err(AppError::UnknownMeal(id)) => surface.error(&format!("No recipe found for id {id}.")),
        Err(err) => {
            warn!("detail lookup failed: {err}");
            surface.error("Could not load the recipe. Please try again.");
        }
    }
}

async fn fetch_detail<C>(catalog: &C, id: &str) -> Result<present::Detail, AppError>
where
    C: Catalog + Sync,
{
    let meal = catalog
        .lookup(id)
        .await?
        .ok_or_else(|| AppError::UnknownMeal(id.to_string()))?;

    Ok(present::detail(&meal))
}
