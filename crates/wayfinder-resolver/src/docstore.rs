use crate::error::{ResolverError, Result};
use crate::registry::ResolverFactory;
use crate::resolver::Resolver;
use async_trait::async_trait;
use redis::AsyncCommands;
use std::sync::Arc;
use tracing::trace;
use url::Url;
use wayfinder_core::RecordId;

/// Record field holding the owning repository's name.
const REPO_FIELD: &str = "repo_name";

/// Document-store resolver backed by Redis.
///
/// Records are stored under their decimal identifier as JSON objects
/// with at least a `repo_name` string field. The resolver holds one
/// multiplexed connection for the life of the process; the driver owns
/// connection safety, lookups are single point reads.
#[derive(Debug, Clone)]
pub struct DocstoreResolver {
    conn: redis::aio::MultiplexedConnection,
}

impl DocstoreResolver {
    /// Creates a resolver from an existing connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Creates a resolver by opening a connection to the given
    /// `redis://` or `rediss://` URI.
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = redis::Client::open(uri)
            .map_err(|e| ResolverError::Configuration(format!("invalid docstore URI: {e}")))?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                ResolverError::Configuration(format!("failed to connect to docstore: {e}"))
            })?;

        Ok(Self::new(conn))
    }
}

#[async_trait]
impl Resolver for DocstoreResolver {
    async fn get_repo(&self, id: RecordId) -> Result<String> {
        trace!(id = %id, "docstore lookup");

        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(id.to_string())
            .await
            .map_err(|e| ResolverError::Backend(e.to_string()))?;

        let raw = raw.ok_or(ResolverError::NotFound(id))?;
        repo_from_record(id, &raw)
    }
}

/// Extracts the repository name from a stored record.
fn repo_from_record(id: RecordId, raw: &str) -> Result<String> {
    let record: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| ResolverError::Backend(format!("malformed record for {id}: {e}")))?;

    match record.get(REPO_FIELD) {
        Some(serde_json::Value::String(repo)) => Ok(repo.clone()),
        Some(_) => Err(ResolverError::Backend(format!(
            "field '{REPO_FIELD}' is not a string in record for {id}"
        ))),
        None => Err(ResolverError::Backend(format!(
            "record for {id} has no '{REPO_FIELD}' field"
        ))),
    }
}

/// Factory for `redis://` and `rediss://` resolvers.
pub struct DocstoreFactory;

#[async_trait]
impl ResolverFactory for DocstoreFactory {
    async fn build(&self, uri: &Url) -> Result<Arc<dyn Resolver>> {
        Ok(Arc::new(DocstoreResolver::connect(uri.as_str()).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> RecordId {
        RecordId::new(1360391327)
    }

    #[test]
    fn record_with_repo_name() {
        let raw = r#"{"id": 1360391327, "repo_name": "sfomuseum-data-maps"}"#;
        assert_eq!(repo_from_record(id(), raw).unwrap(), "sfomuseum-data-maps");
    }

    #[test]
    fn record_missing_field_is_backend_error() {
        let err = repo_from_record(id(), r#"{"id": 1360391327}"#).unwrap_err();
        assert!(matches!(err, ResolverError::Backend(_)));
    }

    #[test]
    fn record_with_non_string_field_is_backend_error() {
        let err = repo_from_record(id(), r#"{"repo_name": 42}"#).unwrap_err();
        assert!(matches!(err, ResolverError::Backend(_)));
    }

    #[test]
    fn unparseable_record_is_backend_error() {
        let err = repo_from_record(id(), "not json").unwrap_err();
        assert!(matches!(err, ResolverError::Backend(_)));
    }
}
