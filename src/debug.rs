//! Debug utilities for development
//!
//! Only compiled with `--features debug`; the turn advancer's invariant
//! sweep (`PlanetSnapshot::check_invariants`) runs unconditionally and does
//! not depend on this module.

use crate::core::PlanetSnapshot;

/// Prints a snapshot's headline numbers and invariant status to stderr.
///
/// # Example
///
/// ```rust
/// use outpost_ledger::{core::{Catalogue, PlanetSnapshot}, debug};
/// use std::sync::Arc;
///
/// let snapshot = PlanetSnapshot::standard_start(Arc::new(Catalogue::default()));
/// debug::print_snapshot(&snapshot);
/// ```
pub fn print_snapshot(snapshot: &PlanetSnapshot) {
    eprintln!("=== outpost-ledger snapshot @ turn {} ===", snapshot.current_turn);
    eprintln!("stocks: {:?}", snapshot.stocks);
    eprintln!("population: {:?}", snapshot.population);
    match snapshot.check_invariants() {
        Ok(()) => eprintln!("invariants: ok"),
        Err(e) => eprintln!("invariants: VIOLATED - {}", e),
    }
    eprintln!("==========================================");
}

/// Serializes a snapshot to pretty-printed JSON, for dumping to a file or
/// pasting into a bug report.
pub fn dump_snapshot(snapshot: &PlanetSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalogue;
    use std::sync::Arc;

    #[test]
    fn dump_snapshot_round_trips_through_json() {
        let snapshot = PlanetSnapshot::standard_start(Arc::new(Catalogue::default()));
        let json = dump_snapshot(&snapshot).expect("snapshot should serialize");
        assert!(json.contains("\"current_turn\""));
    }
}
