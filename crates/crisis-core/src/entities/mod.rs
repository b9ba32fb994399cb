//! Entity structs for the CrisisMap domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the cache,
//! the CLI output, and the schema export share one definition.

mod charity;
mod crisis;
mod filter;

pub use charity::Charity;
pub use crisis::{Crisis, GeoPoint};
pub use filter::FilterState;
