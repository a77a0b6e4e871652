//! View models handed to the rendering surface.
//!
//! The surface itself is whatever implements [`Surface`]; the shipped
//! binary draws to the terminal, anything else just needs these five
//! calls.

use catalog::{Ingredient, Meal};

pub const NO_CATEGORY: &str = "No category";
pub const NO_REGION: &str = "No region";
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// One result card.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub thumb: String,
    pub category: String,
    pub area: String,
}

/// Full recipe view: ingredient pairs in slot order, tags split from the
/// catalog's comma-separated string, instructions with CRLF sequences
/// normalized to newlines and nothing else rewritten.
#[derive(Clone, Debug, PartialEq)]
pub struct Detail {
    pub name: String,
    pub thumb: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
}

/// The narrow rendering interface. An empty result goes to
/// `no_results`, never to `error`.
pub trait Surface {
    fn loading(&self, message: &str);
    fn cards(&self, cards: &[Card]);
    fn detail(&self, detail: &Detail);
    fn no_results(&self);
    fn error(&self, message: &str);
}

pub fn card(meal: &Meal) -> Card {
    Card {
        id: meal.id.clone(),
        name: meal.name.clone(),
        thumb: meal.thumb.clone(),
        category: meal
            .category
            .clone()
            .unwrap_or_else(|| NO_CATEGORY.to_string()),
        area: meal.area.clone().unwrap_or_else(|| NO_REGION.to_string()),
    }
}

pub fn detail(meal: &Meal) -> Detail {
    Detail {
        name: meal.name.clone(),
        thumb: meal.thumb.clone(),
        category: meal.category.clone(),
        area: meal.area.clone(),
        tags: split_tags(meal.tags.as_deref()),
        ingredients: meal.ingredients.clone(),
        instructions: format_instructions(meal.instructions.as_deref()),
    }
}

fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn format_instructions(instructions: Option<&str>) -> String {
    match instructions {
        Some(text) if !text.trim().is_empty() => text.replace("\r\n", "\n"),
        _ => NO_INSTRUCTIONS.to_string(),
    }
}
