//! # Formats Module
//!
//! Byte-level encodings of quiz data.
//!
//! Pure transformations only; reading and writing files is done by the app
//! layer.

mod catalog_json;

pub use catalog_json::*;
