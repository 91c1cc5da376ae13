use crate::error::Result;
use async_trait::async_trait;
use wayfinder_core::RecordId;

/// Maps a record identifier to the name of its owning data repository.
///
/// Implementations hold their backend connection for the life of the
/// process and are shared read-only across request tasks. Lookups are
/// single point reads; a failed lookup surfaces immediately, nothing is
/// retried. Dropping the calling future cancels an in-flight lookup.
#[async_trait]
pub trait Resolver: std::fmt::Debug + Send + Sync + 'static {
    /// Returns the repository name owning the given identifier.
    ///
    /// Fails with [`ResolverError::NotFound`] when no record exists and
    /// [`ResolverError::Backend`] on any transport or storage fault.
    ///
    /// [`ResolverError::NotFound`]: crate::ResolverError::NotFound
    /// [`ResolverError::Backend`]: crate::ResolverError::Backend
    async fn get_repo(&self, id: RecordId) -> Result<String>;
}
