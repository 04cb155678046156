//! Model builders.
//!
//! The host builds effective models through the [`ModelBuilder`] trait.
//! [`DocumentModelBuilder`] reads JSON model documents; [`ManagingModelBuilder`]
//! wraps whichever default builder the [`BuilderRegistry`] offers and manages
//! plugin dependency versions on top of it.

pub mod document;
pub mod managing;
pub mod registry;
pub mod trait_def;

pub use document::DocumentModelBuilder;
pub use managing::ManagingModelBuilder;
pub use registry::BuilderRegistry;
pub use trait_def::ModelBuilder;
