use crate::docstore::DocstoreFactory;
use crate::dynamodb::DynamoDbFactory;
use crate::error::{ResolverError, Result};
use crate::memory::MemoryFactory;
use crate::resolver::Resolver;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Constructs a [`Resolver`] from a configuration URI.
///
/// The full URI is passed through so backend-specific query parameters
/// survive; factories own their configuration grammar.
#[async_trait]
pub trait ResolverFactory: Send + Sync {
    async fn build(&self, uri: &Url) -> Result<Arc<dyn Resolver>>;
}

/// Scheme-keyed registry of resolver factories.
///
/// An explicit object rather than process-global state: the binary
/// builds one at startup and hands it to whatever constructs resolvers.
/// Registration is synchronized against concurrent construction, so
/// late registration of extra backends is safe.
#[derive(Default)]
pub struct ResolverRegistry {
    factories: DashMap<String, Arc<dyn ResolverFactory>>,
}

impl ResolverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in backend registered:
    /// `mem`, `redis`, `rediss`, and `awsdynamodb`.
    pub fn with_defaults() -> Result<Self> {
        let registry = Self::new();

        registry.register("mem", Arc::new(MemoryFactory))?;

        let docstore = Arc::new(DocstoreFactory);
        registry.register("redis", docstore.clone())?;
        registry.register("rediss", docstore)?;

        registry.register("awsdynamodb", Arc::new(DynamoDbFactory))?;

        Ok(registry)
    }

    /// Registers a factory for a URI scheme.
    ///
    /// Fails with [`ResolverError::DuplicateScheme`] if the scheme is
    /// already taken.
    pub fn register(&self, scheme: &str, factory: Arc<dyn ResolverFactory>) -> Result<()> {
        match self.factories.entry(scheme.to_ascii_lowercase()) {
            Entry::Occupied(_) => Err(ResolverError::DuplicateScheme(scheme.to_string())),
            Entry::Vacant(entry) => {
                entry.insert(factory);
                Ok(())
            }
        }
    }

    /// Returns the registered schemes, for startup logging.
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        schemes.sort();
        schemes
    }

    /// Constructs a resolver for a configuration URI.
    ///
    /// The URI's scheme selects the factory; the factory receives the
    /// full URI. Fails with [`ResolverError::UnknownScheme`] when no
    /// factory is registered for the scheme.
    pub async fn new_resolver(&self, uri: &str) -> Result<Arc<dyn Resolver>> {
        let uri = Url::parse(uri)
            .map_err(|e| ResolverError::Configuration(format!("invalid resolver URI: {e}")))?;

        let scheme = uri.scheme().to_ascii_lowercase();

        // Clone the factory out so no map guard is held across the await.
        let factory = self
            .factories
            .get(&scheme)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ResolverError::UnknownScheme(scheme.clone()))?;

        debug!(scheme = %scheme, "constructing resolver");
        factory.build(&uri).await
    }
}
