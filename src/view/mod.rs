//! View item and section model, plus the reconciliation engine.
//!
//! The render surface consumes a `Vec<Section>`; every item and section has a
//! stable identity so the surface can tell moved, added and removed cells
//! apart from cells that merely changed.
//!
//! # Modules
//!
//! - [`items`]: Cell contents ([`ViewItem`])
//! - [`sections`]: Section grouping ([`Section`], [`SectionKind`])
//! - [`reconcile`]: [`compute_sections`], the pure state → sections function

pub mod items;
pub mod reconcile;
pub mod sections;

pub use items::ViewItem;
pub use reconcile::compute_sections;
pub use sections::{Section, SectionKind};
