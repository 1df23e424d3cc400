//! Integration test suite for chromup
//!
//! End-to-end tests for the update workflow. Both remote endpoints (the
//! release feed and the artifact download) are served by `wiremock`, and
//! external OS tools are replaced by a recording stub runner so the exact
//! attach/remove/copy/detach/remove sequence can be asserted.
//!
//! # Test Organization
//!
//! - **resolver**: Release feed resolution and its failure modes
//! - **workflow**: Full update runs, up-to-date short-circuit, cleanup
//! - **cli**: Binary surface, exit codes, check mode


// Integration tests
mod cli;
mod resolver;
