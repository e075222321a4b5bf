// src/core/error.rs
use std::fmt;

/// The non-exceptional failure taxonomy returned by the command surface
/// (spec §7). Every command that fails returns one of these rather than an
/// `Err`; a `§3` invariant failure is a distinct, fatal path represented by
/// `PlannerError::Invariant` instead, never by a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A prerequisite was not satisfied at queue time.
    ReqMissing,
    /// A unique building's count (completed + queued + active) is already
    /// at `maxPerPlanet`.
    PlanetLimitReached,
    /// Remaining housing capacity is less than the requested colonist quantity.
    HousingMissing,
    /// The energy forward-check failed.
    EnergyInsufficient,
    /// The lane's pending queue is already at `maxQueueDepth`.
    QueueFull,
    /// A command referenced a work item that is no longer present.
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::ReqMissing => "prerequisite not satisfied",
            ErrorKind::PlanetLimitReached => "planet-unique limit reached",
            ErrorKind::HousingMissing => "insufficient housing capacity",
            ErrorKind::EnergyInsufficient => "projected net energy would go negative",
            ErrorKind::QueueFull => "lane pending queue is full",
            ErrorKind::NotFound => "entry not found (may already be completed)",
        };
        write!(f, "{}", msg)
    }
}

/// Errors from the genuinely exceptional paths: catalogue ingestion and the
/// debug-only invariant sweep. Command-surface validation failures are
/// reported via `commands::CommandOutcome`, not this type — see spec §7's
/// propagation policy.
#[derive(Debug, Clone)]
pub enum PlannerError {
    /// The content document was malformed or referenced an id that does not
    /// resolve within the catalogue.
    Catalogue(String),
    /// A `§3` invariant failed. Indicates a bug in the engine, not a user
    /// error; callers should treat this as a crash-fail condition.
    Invariant(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Catalogue(msg) => write!(f, "catalogue error: {}", msg),
            PlannerError::Invariant(msg) => write!(f, "invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {}

pub type PlannerResult<T> = Result<T, PlannerError>;
