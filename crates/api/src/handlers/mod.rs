//! Request handlers.
//!
//! One submodule per resource group. Handlers stay thin: extract
//! input, call into `folio_content` / `folio_core`, map failures
//! through [`AppError`](crate::error::AppError).

pub mod contact;
pub mod devlog;
pub mod portfolio;
