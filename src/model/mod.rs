//! # Coffee Data Model
//!
//! The single persisted entity and the explicit schemas used to
//! validate request bodies before any table call is made.

mod errors;
mod item;

pub use errors::{ModelError, ModelResult};
pub use item::{Item, ItemPatch};
