pub mod builder;
pub mod error;
pub mod id_generator;
pub mod metadata_store;
pub mod registry;
pub mod types;

pub use builder::{DefaultStackBuilder, StackBuilder};
pub use error::{Result, StackError};
pub use id_generator::{DefaultImageIdGenerator, ImageIdGenerator};
pub use metadata_store::{InMemoryMetadataStore, MetadataStore};
pub use registry::{StackRegistry, StackSubscriber};
pub use types::*;
