//! Domain models and pure logic for the portfolio backend.
//!
//! This crate holds everything that can be computed without I/O:
//!
//! - [`devlog`] -- development log document model (projects, posts, tags).
//! - [`queries`] -- lookups and derived views over a devlog document.
//! - [`portfolio`] -- static content models (projects, skills, experience).
//! - [`contact`] -- contact form submission model and validation bounds.
//! - [`progress`] -- schedule-based project completion percentage.
//! - [`reading_time`] -- word-count reading time estimate for post content.
//! - [`timefmt`] -- human-readable date and relative time formatting.
//! - [`text`] -- slug generation and excerpt truncation.

pub mod contact;
pub mod devlog;
pub mod error;
pub mod portfolio;
pub mod progress;
pub mod queries;
pub mod reading_time;
pub mod text;
pub mod timefmt;

pub use error::CoreError;
