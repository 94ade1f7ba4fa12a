//! SeaORM entities
//!
//! Storage-level models. Columns the store does not enforce are optional
//! here and validated when converted into domain entities.

pub mod entries;
