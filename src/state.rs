use std::sync::Arc;

use catalog::CatalogClient;

use crate::{config::Config, error::AppError, taxonomy::Taxonomy};

/// Everything a session needs, built once at startup. The taxonomy is
/// loaded here and never mutated afterwards.
pub struct State {
    pub config: Config,
    pub client: CatalogClient,
    pub taxonomy: Taxonomy,
}

impl State {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load();
        let client = CatalogClient::new(&config.api_url, config.http_timeout)?;
        let taxonomy = Taxonomy::load(&client).await;

        Ok(Arc::new(Self {
            config,
            client,
            taxonomy,
        }))
    }
}
