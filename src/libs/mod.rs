//! Core library modules for taskdeck.
//!
//! ## Features
//!
//! - **Model**: task records, categories, priorities, theme
//! - **Board**: the application state and every mutation on it
//! - **Queries**: filtering, search, sorting and statistics
//! - **User Interface**: console rendering, confirmation prompts, export
//! - **Infrastructure**: configuration, data directory, messages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::db::FileStorage;
//! use taskdeck::libs::board::TaskBoard;
//! use taskdeck::libs::task::TaskDraft;
//!
//! let mut board = TaskBoard::open(FileStorage::new())?;
//! board.add(TaskDraft::new("Implement feature").description("Add user authentication"))?;
//! # Ok::<(), taskdeck::libs::board::BoardError>(())
//! ```

pub mod board;
pub mod config;
pub mod confirm;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod query;
pub mod stats;
pub mod task;
pub mod view;
