//! Artifacts module — in-memory store for caller-submitted records
//!
//! Artifacts are arbitrary JSON objects stamped with a server-generated `id`
//! and `created_at`. They live for the lifetime of the process and are never
//! mutated or deleted.

pub mod handler;
pub mod store;

pub use handler::{artifacts_router, ArtifactsState};
pub use store::{Artifact, ArtifactStore};
