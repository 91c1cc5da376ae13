use crate::error::{ResolverError, Result};
use crate::registry::ResolverFactory;
use crate::resolver::Resolver;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use url::Url;
use wayfinder_core::RecordId;

/// In-memory resolver backed by a DashMap.
///
/// Used by tests and local development. Seed it directly with
/// [`MemoryResolver::insert`], or through the `mem://` configuration
/// URI whose query pairs are `identifier=repository` seeds:
///
/// `mem://?1360391327=sfomuseum-data-maps`
#[derive(Debug, Default)]
pub struct MemoryResolver {
    records: DashMap<u64, String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an identifier to a repository name.
    pub fn insert(&self, id: RecordId, repo: impl Into<String>) {
        self.records.insert(id.as_u64(), repo.into());
    }
}

#[async_trait]
impl Resolver for MemoryResolver {
    async fn get_repo(&self, id: RecordId) -> Result<String> {
        self.records
            .get(&id.as_u64())
            .map(|entry| entry.value().clone())
            .ok_or(ResolverError::NotFound(id))
    }
}

/// Factory for `mem://` resolvers.
pub struct MemoryFactory;

#[async_trait]
impl ResolverFactory for MemoryFactory {
    async fn build(&self, uri: &Url) -> Result<Arc<dyn Resolver>> {
        let resolver = MemoryResolver::new();

        for (key, value) in uri.query_pairs() {
            let id: RecordId = key.parse().map_err(|_| {
                ResolverError::Configuration(format!("seed key '{key}' is not an identifier"))
            })?;
            resolver.insert(id, value.into_owned());
        }

        Ok(Arc::new(resolver))
    }
}
