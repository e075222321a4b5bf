// src/systems/validation.rs
use super::outputs::net_outputs;
use crate::core::{ErrorKind, ItemDef, ItemKind, Lane, PlanetSnapshot, Resource};

/// Static validation run at queue time (spec §4.3), in the order the
/// checks are listed: queue depth, prerequisites, planet-unique limit,
/// colonist housing, energy forward-check.
pub fn static_validate(
    snapshot: &PlanetSnapshot,
    lane: Lane,
    def: &ItemDef,
    quantity: u32,
) -> Result<(), ErrorKind> {
    let lane_state = snapshot.lanes.get(lane);
    if lane_state.pending_queue.len() as u32 >= lane_state.max_queue_depth {
        return Err(ErrorKind::QueueFull);
    }

    for prereq in &def.prerequisites {
        if !snapshot.prerequisite_satisfied(prereq) {
            return Err(ErrorKind::ReqMissing);
        }
    }

    if let Some(max) = def.max_per_planet {
        if matches!(def.kind, ItemKind::Structure) && snapshot.total_count_of(&def.id) >= max {
            return Err(ErrorKind::PlanetLimitReached);
        }
    }

    if matches!(def.kind, ItemKind::Colonist) {
        let cap_remaining = colonist_headroom(snapshot, def);
        if cap_remaining < quantity as i64 {
            return Err(ErrorKind::HousingMissing);
        }
    }

    if def.upkeep_per_unit.energy > 0.0 {
        let current_net_energy = net_outputs(snapshot).energy;
        let projected = current_net_energy - def.upkeep_per_unit.energy * quantity as f64;
        if projected < 0.0 {
            return Err(ErrorKind::EnergyInsufficient);
        }
    }

    Ok(())
}

/// Remaining housing headroom for `def`'s colonist kind: the cap minus
/// population already settled into that kind minus the quantity already
/// reserved by other queued/active entries of the same kind (mirroring
/// `total_count_of`'s aggregation, so two back-to-back `queue_item` calls
/// can't jointly overshoot a cap that each passed individually).
fn colonist_headroom(snapshot: &PlanetSnapshot, def: &ItemDef) -> i64 {
    use crate::core::ColonistKind;
    let Some(kind) = def.colonist_kind else {
        return 0;
    };
    let (cap, settled) = match kind {
        ColonistKind::Soldier => (snapshot.housing.soldier_cap, snapshot.population.soldiers),
        ColonistKind::Scientist => (snapshot.housing.scientist_cap, snapshot.population.scientists),
    };
    cap - settled - reserved_of_colonist_kind(snapshot, kind)
}

fn reserved_of_colonist_kind(snapshot: &PlanetSnapshot, kind: crate::core::ColonistKind) -> i64 {
    let matches_kind = |item: &crate::core::WorkItem| {
        snapshot
            .defs
            .get(&item.item_id)
            .and_then(|d| d.colonist_kind)
            == Some(kind)
    };
    Lane::ORDER
        .iter()
        .map(|&lane| {
            let state = snapshot.lanes.get(lane);
            let active: i64 = state
                .active
                .as_ref()
                .filter(|w| matches_kind(w))
                .map(|w| w.quantity as i64)
                .unwrap_or(0);
            let pending: i64 = state
                .pending_queue
                .iter()
                .filter(|w| matches_kind(w))
                .map(|w| w.quantity as i64)
                .sum();
            active + pending
        })
        .sum()
}

/// Dynamic clamp applied at activation: the floor of available-over-cost
/// across every constraint (each resource, idle workers, available space of
/// the appropriate kind), capped at the requested quantity. Returns 0 if
/// the item cannot afford even a single unit.
pub fn dynamic_clamp(snapshot: &PlanetSnapshot, def: &ItemDef, requested: u32) -> u32 {
    let mut max_affordable = requested as u64;

    for resource in Resource::ALL {
        let cost = def.costs_per_unit.resources.get(resource);
        if cost > 0.0 {
            let available = snapshot.stocks.get(resource).max(0.0);
            let affordable = (available / cost).floor();
            max_affordable = max_affordable.min(affordable.max(0.0) as u64);
        }
    }

    if def.costs_per_unit.workers > 0 {
        let affordable = snapshot.population.workers_idle / def.costs_per_unit.workers;
        max_affordable = max_affordable.min(affordable.max(0) as u64);
    }

    if def.costs_per_unit.space > 0 {
        let (used, cap) = if def.is_orbital() {
            (snapshot.space.orbital_used, snapshot.space.orbital_cap)
        } else {
            (snapshot.space.ground_used, snapshot.space.ground_cap)
        };
        let remaining = (cap - used).max(0);
        let affordable = remaining / def.costs_per_unit.space;
        max_affordable = max_affordable.min(affordable.max(0) as u64);
    }

    max_affordable.min(requested as u64) as u32
}
