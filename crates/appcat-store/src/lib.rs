pub mod schema;
pub mod store;

pub use store::{CatalogStore, StoreError};
