// src/config.rs
//! Tunable constants for the simulation, collected in one place the way the
//! teacher's `lib.rs::config` module gathers its own game-balance numbers.

/// Food consumed per capita per turn by every worker, soldier, and scientist.
pub const FOOD_PER_CAPITA: f64 = 0.002;

/// Base per-turn worker growth ratio before any facility bonus is added.
pub const WORKER_GROWTH_BASE: f64 = 0.01;

/// Default `maxQueueDepth` for a newly constructed lane when the catalogue
/// does not specify one (spec's Open Question on `maxQueueDepth`).
pub const DEFAULT_MAX_QUEUE_DEPTH: u32 = 64;

/// A capacity is reported as near-full in `selectors::warnings` at or above
/// this fraction of its cap.
pub const NEAR_FULL_THRESHOLD: f64 = 0.95;

/// Research points produced per scientist per turn.
pub const RESEARCH_POINTS_PER_SCIENTIST: f64 = 1.0;

/// Constants describing `PlanetSnapshot::standard_start`.
pub mod starting_state {
    pub const STARTER_GROUND_CAP: i64 = 60;
    pub const STARTER_ORBITAL_CAP: i64 = 40;
    pub const STARTER_METAL: f64 = 6000.0;
    pub const STARTER_MINERAL: f64 = 4000.0;
    pub const STARTER_FOOD: f64 = 2000.0;
    pub const STARTER_ENERGY: f64 = 0.0;
    pub const STARTER_WORKERS: i64 = 5000;
    pub const STARTER_PLANET_LIMIT: i64 = 4;
    pub const STARTER_BUILDING_ID: &str = "outpost";
}
