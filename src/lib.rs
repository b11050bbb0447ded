//! # filerev - Reversed renderings and comparison of text and CSV files
//!
//! Reads a `.txt` or `.csv` file and renders it three ways (as read, with
//! line order reversed, and as a word-level palindrome), or compares two
//! files by line count and exact equality.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`file_handler`] - Format readers (`.txt`, `.csv`) behind one trait
//! - [`transform`] - Pure content transformations and comparison
//! - [`config`] - Runtime settings
//! - [`app`] - Dispatcher choosing between display and comparison

// Core modules
pub mod config;
pub mod error;
pub mod file_handler;
pub mod transform;

// Orchestration
pub mod app;

// Re-export commonly used types for convenience
pub use error::{FilerevError, Result};

// Public API surface for external usage
pub use app::Dispatcher;
pub use config::{DisplayMode, Settings};
pub use file_handler::{CsvReader, FormatReader, PlainTextReader, ReaderFactory};
pub use transform::Comparison;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
