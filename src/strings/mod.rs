//! String records: wire types, durable store, and HTTP handlers

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{strings_router, StringsState};
pub use store::StringStore;
pub use types::{StringProperties, StringRecord};
