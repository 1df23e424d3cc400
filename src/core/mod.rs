//! Core types shared across the updater.

pub mod error;

pub use error::UpdaterError;
