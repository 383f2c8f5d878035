//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — setup/validate/status plus the default run-both flow.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate filesystem work to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
