//! Cross-cutting helpers.

pub mod progress;
