//! Context providers for shared application state.

pub mod collection;

pub use collection::{CollectionProvider, use_collection};
