use crate::template::DataUriTemplate;
use std::sync::Arc;
use typed_builder::TypedBuilder;
use wayfinder_resolver::Resolver;

/// Shared application state.
///
/// Built once at startup; the resolver holds the open backend
/// connection for the life of the process and is shared read-only
/// across request tasks.
#[derive(Clone, TypedBuilder)]
pub struct AppState {
    pub resolver: Arc<dyn Resolver>,
    pub template: DataUriTemplate,
}
