//! CLI command implementations
//!
//! Each command mounts a view, runs its fetch cycle against the remote
//! service, and prints the rendering. A successful mutation navigates by
//! mounting the destination view, which re-fetches.

pub mod edit;
pub mod list;
pub mod new;
pub mod recent;
pub mod show;
