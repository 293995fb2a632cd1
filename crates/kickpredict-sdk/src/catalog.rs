//! Cached category and health lookups with offline fallbacks.

use crate::client::PredictorClient;
use crate::error::SdkError;
use kickpredict_domain::{Category, CategoryInfo, HealthStatus};
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, warn};

/// How long a fetched category list stays fresh
pub const CATEGORIES_TTL: Duration = Duration::from_secs(300);

/// How long a health answer stays fresh
pub const HEALTH_TTL: Duration = Duration::from_secs(60);

/// Success rate shown for categories missing from the catalog
pub const DEFAULT_AVG_SUCCESS: &str = "42%";

/// Category descriptions and historical success rates used while the
/// service is unreachable
pub const BUILTIN_CATEGORIES: [(Category, &str, &str); 15] = [
    (Category::FilmVideo, "Filmes, documentários, vídeos", "42%"),
    (Category::Music, "Álbuns, shows, instrumentos", "53%"),
    (Category::Publishing, "Livros, revistas, e-books", "35%"),
    (Category::Games, "Jogos de tabuleiro, card games, RPG", "44%"),
    (Category::Technology, "Gadgets, apps, hardware", "24%"),
    (Category::Design, "Produtos, móveis, acessórios", "42%"),
    (Category::Art, "Pinturas, esculturas, instalações", "45%"),
    (Category::Comics, "HQs, graphic novels, mangás", "59%"),
    (Category::Theater, "Peças, musicais, performances", "64%"),
    (Category::Food, "Restaurantes, produtos alimentícios", "28%"),
    (Category::Photography, "Projetos fotográficos, livros de fotos", "34%"),
    (Category::Fashion, "Roupas, calçados, acessórios", "28%"),
    (Category::Dance, "Espetáculos, workshops, vídeos", "65%"),
    (Category::Journalism, "Reportagens, documentários jornalísticos", "24%"),
    (Category::Crafts, "Artesanato, DIY, kits", "27%"),
];

/// The built-in table as catalog entries
pub fn builtin_categories() -> Vec<CategoryInfo> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|(category, description, avg_success)| CategoryInfo {
            value: category.as_str().to_string(),
            description: description.to_string(),
            avg_success: avg_success.to_string(),
        })
        .collect()
}

/// Caching front for the category and health endpoints
///
/// Successful answers are cached (categories for 5 minutes, health for 1
/// minute). A failed category fetch is replaced by [`builtin_categories`]
/// without surfacing the error; the fallback itself is not cached, so the
/// next lookup tries the service again.
pub struct CategoryCatalog {
    client: PredictorClient,
    categories: Cache<(), Vec<CategoryInfo>>,
    health: Cache<(), HealthStatus>,
}

impl std::fmt::Debug for CategoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryCatalog")
            .field("client", &self.client)
            .field("categories_cached", &self.categories.entry_count())
            .field("health_cached", &self.health.entry_count())
            .finish()
    }
}

/// Single-entry cache expiring `ttl` after insertion
fn single_entry<V: Clone + Send + Sync + 'static>(ttl: Duration) -> Cache<(), V> {
    Cache::builder().max_capacity(1).time_to_live(ttl).build()
}

impl CategoryCatalog {
    /// Wrap a client with the default TTLs
    pub fn new(client: PredictorClient) -> Self {
        Self::with_ttls(client, CATEGORIES_TTL, HEALTH_TTL)
    }

    /// Wrap a client with custom TTLs
    pub fn with_ttls(client: PredictorClient, categories_ttl: Duration, health_ttl: Duration) -> Self {
        Self {
            client,
            categories: single_entry(categories_ttl),
            health: single_entry(health_ttl),
        }
    }

    /// The underlying client
    pub fn client(&self) -> &PredictorClient {
        &self.client
    }

    /// Category list, from cache, service, or the built-in table
    pub async fn categories(&self) -> Vec<CategoryInfo> {
        if let Some(cached) = self.categories.get(&()).await {
            debug!("Category list served from cache");
            return cached;
        }

        match self.client.categories().await {
            Ok(categories) if !categories.is_empty() => {
                self.categories.insert((), categories.clone()).await;
                categories
            }
            Ok(_) => {
                warn!("Service returned no categories, using built-in table");
                builtin_categories()
            }
            Err(error) => {
                warn!(%error, "Failed to load categories, using built-in table");
                builtin_categories()
            }
        }
    }

    /// Historical success rate of a category, e.g. "44%"
    pub async fn avg_success(&self, category: Category) -> String {
        self.categories()
            .await
            .into_iter()
            .find(|info| info.category() == Some(category))
            .map(|info| info.avg_success)
            .filter(|rate| !rate.is_empty())
            .unwrap_or_else(|| DEFAULT_AVG_SUCCESS.to_string())
    }

    /// Health of the service, served from cache while fresh
    pub async fn health(&self) -> Result<HealthStatus, SdkError> {
        if let Some(cached) = self.health.get(&()).await {
            return Ok(cached);
        }
        self.refresh_health().await
    }

    /// Query health, bypassing the cache
    pub async fn refresh_health(&self) -> Result<HealthStatus, SdkError> {
        match self.client.health().await {
            Ok(status) => {
                self.health.insert((), status.clone()).await;
                Ok(status)
            }
            Err(error) => {
                self.health.invalidate(&()).await;
                Err(error)
            }
        }
    }

    /// Forget cached health, e.g. after training was started
    pub async fn invalidate_health(&self) {
        self.health.invalidate(&()).await;
    }
}
