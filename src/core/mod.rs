//! # Core Application Logic
//!
//! This module contains sprint's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form/timer)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │  polls keys + ticker,
//!                         │  Adapter   │  writes the status file
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and its `Phase`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`form`]: Focus-cycling form with line-edited fields
//! - [`countdown`]: Remaining time and `MM:SS` formatting
//! - [`ticker`]: Re-armed one-shot tick source
//! - [`status_file`]: The overwritten `MM:SS` file
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod countdown;
pub mod form;
pub mod state;
pub mod status_file;
pub mod ticker;
