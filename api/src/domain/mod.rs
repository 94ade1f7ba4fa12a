//! Domain layer
//!
//! Journal entries and the ports the application layer depends on.
//! - `entities`: `Entry`, its identifier and the `Sentiment` label
//! - `ports`: persistence and sentiment analysis traits

pub mod entities;
pub mod ports;
