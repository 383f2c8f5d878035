//! Service layer containing filesystem logic and side-effect helpers.
//!
//! ## Service map
//! - `environment.rs` — working-directory creation + path status report.
//! - `config.rs` — configuration file presence check.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod environment;
pub mod output;
