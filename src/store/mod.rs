// Mon Oct 19 2026 - Alex

pub mod entity;
pub mod store;

pub use entity::EntityRecord;
pub use store::{EntityStore, StoreSnapshot};
