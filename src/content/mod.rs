//! Static and dynamic content serving.
//!
//! This module implements the two response paths of the server: streaming
//! file bytes for static targets, and delegating to an external handler
//! process for dynamic targets, plus the target-to-resource classification
//! shared by both.

pub mod dynamic;
pub mod resource;
pub mod static_files;

pub use resource::{Resource, ResourceKind};
