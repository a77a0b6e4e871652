use catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("catalog request failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("no recipe found for id {0}")]
    UnknownMeal(String),
}
