//! Model sources and the host collaborators around them.
//!
//! Sources describe where a model document lives; resolvers turn coordinates
//! into sources (local repositories, or whatever the host provides); the
//! model cache lets one build reuse models it has already built.

pub mod cache;
pub mod repository;
pub mod resolver;
pub mod source;

pub use cache::{CacheValue, InMemoryModelCache, ModelCache};
pub use repository::RepositoryResolver;
pub use resolver::{ModelResolver, UnresolvableModelError};
pub use source::ModelSource;
