//! # certquiz
//!
//! Application layer for the certquiz progression engine.
//!
//! Everything with side effects lives here: reading the catalog and the
//! configuration file, the interactive terminal session and the HTTP
//! adapter. The binary in `main.rs` only installs logging and dispatches to
//! [`cli::execute`].

pub mod api;
pub mod cli;
pub mod config;
