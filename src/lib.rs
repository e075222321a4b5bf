#![doc = include_str!("../README.md")]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # Outpost Ledger
//!
//! A deterministic, rewindable build-order planner for a 4X space-strategy
//! planet economy.
//!
//! ## Quick start
//!
//! ```rust
//! use outpost_ledger::prelude::*;
//! use std::sync::Arc;
//!
//! let catalogue = Arc::new(Catalogue::default());
//! let start = PlanetSnapshot::standard_start(catalogue);
//! let mut timeline = Timeline::new(start);
//!
//! timeline.simulate_turns(10).expect("advance should not violate invariants");
//! let summary = selectors::planet_summary(timeline.current_view());
//! assert_eq!(summary.turn, 11);
//! ```
//!
//! ## Architecture overview
//!
//! There is no event bus and no global mutable state. A [`core::PlanetSnapshot`]
//! is a plain, fully-cloneable value type holding one planet's state for one
//! turn. [`systems::advance`] is a pure function `state -> state'` executing
//! the turn order: activation, progress, completion, outputs, growth, turn
//! counter, invariant sweep. [`timeline::Timeline`] stores the append-only
//! vector of snapshots and implements the truncate-and-replay pattern: a
//! mutation at turn `t` discards every snapshot after `t` and the caller
//! re-runs `advance` forward. [`commands`] is the validated, re-entrant
//! surface that wraps timeline mutation with static/dynamic validation.
//! [`selectors`] computes read-only projections for presentation without
//! mutating anything.
//!
//! ## Error handling
//!
//! Two distinct error paths, matching the two distinct failure modes:
//!
//! - Command-surface validation failures ([`core::ErrorKind`], returned as
//!   [`commands::CommandOutcome`]) are expected, non-exceptional outcomes —
//!   "requires X", "housing full" — and never leave the timeline mutated.
//! - Catalogue ingestion failures and invariant violations
//!   ([`core::PlannerError`], [`core::PlannerResult`]) are exceptional: a
//!   malformed content document, or a `§3`-equivalent invariant broken by a
//!   bug in the engine itself.

pub mod commands;
pub mod config;
pub mod core;
#[cfg(feature = "debug")]
pub mod debug;
pub mod selectors;
pub mod systems;
pub mod timeline;

pub use commands::CommandOutcome;
pub use core::{Catalogue, ErrorKind, ItemDef, Lane, PlannerError, PlannerResult, PlanetSnapshot};
pub use timeline::Timeline;

/// Common imports for working with the planner engine.
pub mod prelude {
    pub use crate::commands::{self, CommandOutcome};
    pub use crate::core::{
        Catalogue, ErrorKind, ItemDef, ItemKind, Lane, PlannerError, PlannerResult, PlanetSnapshot,
        Resource, ResourceTable, WorkItem,
    };
    pub use crate::selectors;
    pub use crate::systems::{self, advance};
    pub use crate::timeline::Timeline;
}

/// Current version of the planner engine, as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub mod test_utils {
    //! Fixture helpers shared by integration tests so they don't each
    //! re-derive catalogue and timeline setup.

    use crate::core::Catalogue;
    use crate::timeline::Timeline;
    use crate::{core::PlanetSnapshot, PlannerResult};
    use std::sync::Arc;

    /// A small catalogue covering the item families exercised by the
    /// end-to-end scenarios: a starter Outpost, a Farm, a Solar Generator,
    /// a power-hungry Lab, a Fighter ship, a Barracks + Soldier pair, and a
    /// Metal Mine.
    pub fn standard_test_catalogue() -> Arc<Catalogue> {
        let raw = serde_json::json!({
            "structures": [
                {
                    "id": "outpost",
                    "name": "Outpost",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 1,
                    "costsPerUnit": { "resources": {}, "workers": 0, "space": 1 }
                },
                {
                    "id": "farm",
                    "name": "Farm",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 4,
                    "costsPerUnit": { "resources": { "metal": 200.0 }, "workers": 0, "space": 1 },
                    "isAbundanceScaled": true,
                    "effectsOnComplete": { "production": { "food": 50.0 } }
                },
                {
                    "id": "solar_generator",
                    "name": "Solar Generator",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 3,
                    "costsPerUnit": { "resources": { "metal": 150.0 }, "workers": 0, "space": 1 },
                    "effectsOnComplete": { "production": { "energy": 30.0 } }
                },
                {
                    "id": "research_lab",
                    "name": "Research Lab",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 5,
                    "costsPerUnit": { "resources": { "metal": 300.0 }, "workers": 0, "space": 1 },
                    "upkeepPerUnit": { "energy": 10.0 },
                    "effectsOnComplete": { "production": { "research_points": 5.0 } }
                },
                {
                    "id": "metal_mine",
                    "name": "Metal Mine",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 6,
                    "costsPerUnit": { "resources": { "mineral": 100.0 }, "workers": 2, "space": 1 },
                    "effectsOnComplete": { "production": { "metal": 25.0 } }
                },
                {
                    "id": "barracks",
                    "name": "Barracks",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 3,
                    "costsPerUnit": { "resources": { "metal": 100.0 }, "workers": 0, "space": 1 },
                    "maxPerPlanet": 1,
                    "effectsOnComplete": { "soldierCap": 50 }
                },
                {
                    "id": "shipyard",
                    "name": "Shipyard",
                    "lane": "building",
                    "type": "structure",
                    "durationTurns": 2,
                    "costsPerUnit": { "resources": { "metal": 120.0, "mineral": 60.0 }, "workers": 4, "space": 2 }
                }
            ],
            "units": [
                {
                    "id": "fighter",
                    "name": "Fighter",
                    "lane": "ship",
                    "type": "ship",
                    "durationTurns": 3,
                    "costsPerUnit": { "resources": { "metal": 10.0 }, "workers": 0, "space": 0 }
                }
            ],
            "colonists": [
                {
                    "id": "soldier_unit",
                    "name": "Soldier",
                    "lane": "colonist",
                    "type": "colonist",
                    "colonistKind": "soldier",
                    "durationTurns": 2,
                    "costsPerUnit": { "resources": { "food": 20.0 }, "workers": 1, "space": 0 },
                    "prerequisites": ["barracks"]
                }
            ],
            "research": [
                {
                    "id": "orbital_expansion",
                    "name": "Orbital Expansion",
                    "lane": "research",
                    "type": "research",
                    "durationTurns": 3,
                    "costsPerUnit": { "resources": { "mineral": 80.0 }, "workers": 0, "space": 0 },
                    "effectsOnComplete": { "planetLimit": 1 }
                }
            ]
        });
        Arc::new(Catalogue::from_json_value(raw).expect("fixture catalogue must be valid"))
    }

    /// A fresh timeline seeded with `standard_test_catalogue` and the
    /// standard starting state.
    pub fn standard_test_timeline() -> Timeline {
        Timeline::new(PlanetSnapshot::standard_start(standard_test_catalogue()))
    }

    /// Advances `timeline` by `n` turns, propagating any invariant failure.
    pub fn advance_n(timeline: &mut Timeline, n: usize) -> PlannerResult<()> {
        timeline.simulate_turns(n)
    }
}
