use anyhow::Context;
use recipes_config::RecipesConfig;
use recipes_core::pagination::{PageRequest, SortOrder};
use recipes_db::service::RecipeService;

use crate::schemas::SchemaRegistry;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: RecipeService,
    pub config: RecipesConfig,
    pub schemas: SchemaRegistry,
}

impl AppContext {
    /// Open the configured database and build the schema registry.
    pub async fn init(config: RecipesConfig) -> anyhow::Result<Self> {
        let service = RecipeService::from_config(&config)
            .await
            .with_context(|| {
                format!("failed to open recipe database at {}", config.database.path)
            })?;
        let schemas = SchemaRegistry::new().context("failed to build schema registry")?;
        tracing::debug!(database = %config.database.path, "application context ready");

        Ok(Self {
            service,
            config,
            schemas,
        })
    }

    /// Page request with the configured size default and cap applied.
    #[must_use]
    pub fn page_request(
        &self,
        page: Option<u32>,
        size: Option<u32>,
        sort: Vec<SortOrder>,
    ) -> PageRequest {
        PageRequest::new(
            page,
            size,
            sort,
            self.config.listing.default_page_size,
            self.config.listing.max_page_size,
        )
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use recipes_core::enums::SortProperty;
    use recipes_core::pagination::{SortOrder, default_sort};

    use super::test_support::memory_context;

    #[tokio::test]
    async fn page_request_applies_listing_config() {
        let ctx = memory_context().await;

        let defaulted = ctx.page_request(None, None, Vec::new());
        assert_eq!(defaulted.size, 20);
        assert_eq!(defaulted.sort, default_sort());

        let clamped = ctx.page_request(
            Some(2),
            Some(500),
            vec![SortOrder::asc(SortProperty::Id)],
        );
        assert_eq!(clamped.size, 50);
        assert_eq!(clamped.page, 2);
        assert_eq!(clamped.sort, vec![SortOrder::asc(SortProperty::Id)]);
    }
}
