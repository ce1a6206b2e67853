//! Core library for the task board
//!
//! This crate contains the board's business logic, including:
//! - Task records and the pending/completed/all views
//! - Drag-and-drop reconciliation of the master task list
//! - Key-value persistence of the board state

pub mod config;
pub mod error;
pub mod storage;
pub mod task;

pub use config::BoardConfig;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
