//! Resolver abstraction for the Wayfinder redirect service.
//!
//! A [`Resolver`] maps a record identifier to the name of the data
//! repository that owns it. Backends are constructed from a
//! configuration URI whose scheme selects a [`ResolverFactory`] in a
//! [`ResolverRegistry`], so the server never knows backend details.
//!
//! # Example
//!
//! ```rust,no_run
//! use wayfinder_core::RecordId;
//! use wayfinder_resolver::ResolverRegistry;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ResolverRegistry::with_defaults()?;
//! let resolver = registry.new_resolver("redis://127.0.0.1:6379").await?;
//!
//! let repo = resolver.get_repo(RecordId::new(1360391327)).await?;
//! println!("owned by: {}", repo);
//! # Ok(())
//! # }
//! ```

pub mod docstore;
pub mod dynamodb;
pub mod error;
pub mod memory;
pub mod registry;
pub mod resolver;

pub use docstore::DocstoreResolver;
pub use dynamodb::DynamoDbResolver;
pub use error::{ResolverError, Result};
pub use memory::MemoryResolver;
pub use registry::{ResolverFactory, ResolverRegistry};
pub use resolver::Resolver;
