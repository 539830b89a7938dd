//! Output helpers.
//!
//! - run record export (JSON) (`export`)

pub mod export;

pub use export::*;
