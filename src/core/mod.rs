// src/core/mod.rs
pub mod catalogue;
pub mod error;
pub mod snapshot;
pub mod types;

pub use catalogue::Catalogue;
pub use error::{ErrorKind, PlannerError, PlannerResult};
pub use snapshot::PlanetSnapshot;
pub use types::*;
