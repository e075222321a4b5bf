// src/core/snapshot.rs
use super::catalogue::Catalogue;
use super::error::{PlannerError, PlannerResult};
use super::types::{
    Housing, ItemId, Lane, Lanes, Population, ResourceTable, Space, Turn, CompletedCounts,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Full per-turn state of a single planet's economy and construction
/// pipeline. A plain, fully-cloneable value type: the timeline stores one
/// of these per turn and never mutates one in place except through
/// `Timeline::mutate_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    pub current_turn: Turn,
    pub stocks: ResourceTable,
    pub abundance: ResourceTable,
    pub space: Space,
    pub housing: Housing,
    pub population: Population,
    pub completed_counts: CompletedCounts,
    pub completed_research: Vec<ItemId>,
    pub planet_limit: i64,
    pub lanes: Lanes,
    /// Shared, read-only reference to the item catalogue. Excluded from
    /// (de)serialization: callers reattach it via `Catalogue::default()` or
    /// by re-injecting the same `Arc` after loading.
    #[serde(skip)]
    pub defs: Arc<Catalogue>,
}

/// Four empty lanes, each with `maxQueueDepth` set to the configured
/// default (spec's Open Question on `maxQueueDepth`).
fn fresh_lanes() -> Lanes {
    let mut lanes = Lanes::default();
    for &lane in Lane::ORDER.iter() {
        lanes.get_mut(lane).max_queue_depth = crate::config::DEFAULT_MAX_QUEUE_DEPTH;
    }
    lanes
}

impl PlanetSnapshot {
    /// The standard starting state described by the catalogue ingestion
    /// interface: abundances all 1.0, default space caps, starter stocks,
    /// starter population, one completed Outpost.
    pub fn standard_start(defs: Arc<Catalogue>) -> PlanetSnapshot {
        use crate::config::starting_state as cfg;

        let mut completed_counts = CompletedCounts::new();
        if defs.contains(cfg::STARTER_BUILDING_ID) {
            completed_counts.insert(cfg::STARTER_BUILDING_ID.to_string(), 1);
        } else {
            eprintln!(
                "warning: standard_start catalogue has no '{}' item; starter count omitted",
                cfg::STARTER_BUILDING_ID
            );
        }

        PlanetSnapshot {
            current_turn: 0,
            stocks: ResourceTable {
                metal: cfg::STARTER_METAL,
                mineral: cfg::STARTER_MINERAL,
                food: cfg::STARTER_FOOD,
                energy: cfg::STARTER_ENERGY,
                research_points: 0.0,
            },
            abundance: ResourceTable::uniform(1.0),
            space: Space {
                ground_used: 0,
                ground_cap: cfg::STARTER_GROUND_CAP,
                orbital_used: 0,
                orbital_cap: cfg::STARTER_ORBITAL_CAP,
            },
            housing: Housing::default(),
            population: Population {
                workers_total: cfg::STARTER_WORKERS,
                workers_idle: cfg::STARTER_WORKERS,
                soldiers: 0,
                scientists: 0,
                busy_by_lane: Default::default(),
            },
            completed_counts,
            completed_research: Vec::new(),
            planet_limit: cfg::STARTER_PLANET_LIMIT,
            lanes: fresh_lanes(),
            defs,
        }
    }

    /// True iff `id` is satisfied as a prerequisite: completed (count > 0),
    /// in `completedResearch`, or present anywhere (active or pending) in
    /// any lane. See the static validation prerequisite rule.
    pub fn prerequisite_satisfied(&self, id: &str) -> bool {
        if self.completed_counts.get(id).copied().unwrap_or(0) > 0 {
            return true;
        }
        if self.completed_research.iter().any(|r| r == id) {
            return true;
        }
        Lane::ORDER.iter().any(|&lane| {
            let state = self.lanes.get(lane);
            state.active.as_ref().map(|w| w.item_id == id).unwrap_or(false)
                || state.pending_queue.iter().any(|w| w.item_id == id)
        })
    }

    /// Total of completed + queued + active instances of `id`, used by the
    /// planet-unique limit check.
    pub fn total_count_of(&self, id: &str) -> u32 {
        let completed = self.completed_counts.get(id).copied().unwrap_or(0);
        let in_lanes: u32 = Lane::ORDER
            .iter()
            .map(|&lane| {
                let state = self.lanes.get(lane);
                let active: u32 = state
                    .active
                    .as_ref()
                    .filter(|w| w.item_id == id)
                    .map(|w| w.quantity)
                    .unwrap_or(0);
                let pending: u32 = state
                    .pending_queue
                    .iter()
                    .filter(|w| w.item_id == id)
                    .map(|w| w.quantity)
                    .sum();
                active + pending
            })
            .sum();
        completed + in_lanes
    }

    /// Debug-only sweep of every `§3`-equivalent invariant. Called from the
    /// turn advancer's invariant sweep and exercised directly by property
    /// tests; cheap enough to run unconditionally in tests but gated behind
    /// the `debug` feature for production call sites.
    pub fn check_invariants(&self) -> PlannerResult<()> {
        for &lane in Lane::ORDER.iter() {
            // Invariant 1: at most one active item per lane is structurally
            // guaranteed by `Option<WorkItem>`; nothing to check here beyond
            // the type itself.
            let state = self.lanes.get(lane);
            for item in state.pending_queue.iter().chain(state.active.iter()) {
                if !item.is_wait && self.defs.get(&item.item_id).is_none() {
                    return Err(PlannerError::Invariant(format!(
                        "work item '{}' references unknown catalogue id '{}'",
                        item.id, item.item_id
                    )));
                }
            }
        }
        for id in self.completed_counts.keys() {
            if self.defs.get(id).is_none() {
                return Err(PlannerError::Invariant(format!(
                    "completedCounts references unknown catalogue id '{}'",
                    id
                )));
            }
        }

        if self.population.soldiers > self.housing.soldier_cap {
            return Err(PlannerError::Invariant(
                "soldiers exceed soldierCap".to_string(),
            ));
        }
        if self.population.scientists > self.housing.scientist_cap {
            return Err(PlannerError::Invariant(
                "scientists exceed scientistCap".to_string(),
            ));
        }

        let busy_sum = self.population.busy_by_lane.sum();
        if self.population.workers_idle + busy_sum != self.population.workers_total {
            return Err(PlannerError::Invariant(format!(
                "population conservation violated: idle({}) + busy({}) != total({})",
                self.population.workers_idle, busy_sum, self.population.workers_total
            )));
        }

        if self.space.ground_used > self.space.ground_cap {
            return Err(PlannerError::Invariant(
                "groundUsed exceeds groundCap".to_string(),
            ));
        }
        if self.space.orbital_used > self.space.orbital_cap {
            return Err(PlannerError::Invariant(
                "orbitalUsed exceeds orbitalCap".to_string(),
            ));
        }

        for def in self.defs.iter() {
            if let Some(max) = def.max_per_planet {
                if self.total_count_of(&def.id) > max {
                    return Err(PlannerError::Invariant(format!(
                        "item '{}' exceeds maxPerPlanet ({})",
                        def.id, max
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn empty_catalogue() -> Arc<Catalogue> {
        Arc::new(Catalogue::default())
    }

    #[test]
    fn standard_start_has_expected_stocks_and_population() {
        use crate::config::starting_state as cfg;
        let snap = PlanetSnapshot::standard_start(empty_catalogue());
        assert_eq!(snap.current_turn, 0);
        assert_eq!(snap.stocks.metal, cfg::STARTER_METAL);
        assert_eq!(snap.population.workers_total, cfg::STARTER_WORKERS);
        assert_eq!(snap.population.workers_idle, cfg::STARTER_WORKERS);
        assert_eq!(snap.planet_limit, cfg::STARTER_PLANET_LIMIT);
        assert!(snap.check_invariants().is_ok());
    }

    #[test]
    fn prerequisite_satisfied_by_completed_count() {
        let mut snap = PlanetSnapshot::standard_start(empty_catalogue());
        snap.completed_counts.insert("barracks".to_string(), 1);
        assert!(snap.prerequisite_satisfied("barracks"));
        assert!(!snap.prerequisite_satisfied("shipyard"));
    }
}
