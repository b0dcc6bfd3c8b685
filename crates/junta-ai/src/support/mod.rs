//! Directory of support services and static guidance for people at risk.

pub mod catalog;
pub mod guidance;
pub mod router;

pub use catalog::{default_catalog, ResourceEntry, ResourceKind, NATIONWIDE};
pub use router::support_router;
