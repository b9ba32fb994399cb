//! # crisis-core
//!
//! Canonical types shared by every CrisisMap crate.
//!
//! - Entity structs for the normalized crisis record, charities, and filter state
//! - Category, region, urgency, and source enumerations with their label/color tables
//! - Lenient date parsing for upstream timestamps
//! - Cross-cutting error types
//! - JSON Schema lookup for the `schema` command

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod schema;

pub use entities::{Charity, Crisis, FilterState, GeoPoint};
pub use enums::{CrisisCategory, Region, SourceTag, UrgencyTier};
pub use errors::CoreError;
