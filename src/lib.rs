//! # Taskdeck - a terminal task list
//!
//! Keeps a personal to-do list in a JSON snapshot under the user data
//! directory and lets you filter, sort, search and chart it.
//!
//! ## Features
//!
//! - **Tasks**: add, complete, rename, delete and clear completed tasks
//! - **Views**: category, status and priority filters, free-text search, four sort orders
//! - **Selection**: pick several tasks and delete them in one go
//! - **Statistics**: completion rate, 7-day average, category and priority charts
//! - **Export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
