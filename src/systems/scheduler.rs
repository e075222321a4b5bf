// src/systems/scheduler.rs
use super::validation::dynamic_clamp;
use crate::core::{ColonistKind, ItemKind, Lane, PlanetSnapshot, Resource, Turn, WorkItemId};
use std::collections::HashSet;

/// Activation phase (spec §4.5 step 1): for each lane in `Lane::ORDER`, if
/// `active` is empty and the pending queue is non-empty, attempt to
/// activate the head. Returns the set of work item ids activated this
/// turn, so the progress phase can skip decrementing them.
pub fn activate_phase(snapshot: &mut PlanetSnapshot, new_turn: Turn) -> HashSet<WorkItemId> {
    let mut activated = HashSet::new();
    for &lane in Lane::ORDER.iter() {
        if let Some(id) = try_activate(snapshot, lane, new_turn) {
            activated.insert(id);
        }
    }
    activated
}

fn try_activate(snapshot: &mut PlanetSnapshot, lane: Lane, new_turn: Turn) -> Option<WorkItemId> {
    {
        let lane_state = snapshot.lanes.get(lane);
        if lane_state.active.is_some() || lane_state.pending_queue.is_empty() {
            return None;
        }
    }

    let head = snapshot.lanes.get(lane).pending_queue[0].clone();

    if head.is_wait {
        let mut item = head;
        let duration = item.turns_remaining;
        item.turns_remaining = duration.saturating_sub(1);
        item.start_turn = Some(new_turn);
        item.completion_turn = Some(new_turn + duration.saturating_sub(1));
        let id = item.id;
        let lane_state = snapshot.lanes.get_mut(lane);
        lane_state.pending_queue.remove(0);
        lane_state.active = Some(item);
        return Some(id);
    }

    let Some(def) = snapshot.defs.get(&head.item_id).cloned() else {
        return None;
    };

    let clamped = dynamic_clamp(snapshot, &def, head.quantity);
    if clamped == 0 {
        return None;
    }

    for resource in Resource::ALL {
        let cost = def.costs_per_unit.resources.get(resource) * clamped as f64;
        *snapshot.stocks.get_mut(resource) -= cost;
    }

    let workers_reserved = def.costs_per_unit.workers * clamped as i64;
    if workers_reserved > 0 {
        snapshot.population.workers_idle -= workers_reserved;
        *snapshot.population.busy_by_lane.get_mut(lane) += workers_reserved;
    }

    let space_reserved = def.costs_per_unit.space * clamped as i64;
    if space_reserved > 0 {
        if def.is_orbital() {
            snapshot.space.orbital_used += space_reserved;
        } else {
            snapshot.space.ground_used += space_reserved;
        }
    }

    let mut item = head;
    item.quantity = clamped;
    item.turns_remaining = def.duration_turns.saturating_sub(1);
    item.start_turn = Some(new_turn);
    item.completion_turn = Some(new_turn + def.duration_turns.saturating_sub(1));
    let id = item.id;

    let lane_state = snapshot.lanes.get_mut(lane);
    lane_state.pending_queue.remove(0);
    lane_state.active = Some(item);
    Some(id)
}

/// Progress phase (spec §4.5 step 2): every active item not activated this
/// turn loses one `turnsRemaining`.
pub fn progress_phase(snapshot: &mut PlanetSnapshot, activated_this_turn: &HashSet<WorkItemId>) {
    for &lane in Lane::ORDER.iter() {
        let lane_state = snapshot.lanes.get_mut(lane);
        if let Some(item) = lane_state.active.as_mut() {
            if !activated_this_turn.contains(&item.id) && item.turns_remaining > 0 {
                item.turns_remaining -= 1;
            }
        }
    }
}

/// Completion phase (spec §4.5 step 3): every active item with
/// `turnsRemaining == 0` applies its effects, releases into history (or is
/// dropped silently, for wait items), and clears the lane.
pub fn completion_phase(snapshot: &mut PlanetSnapshot) {
    for &lane in Lane::ORDER.iter() {
        let is_done = snapshot
            .lanes
            .get(lane)
            .active
            .as_ref()
            .map(|item| item.turns_remaining == 0)
            .unwrap_or(false);
        if !is_done {
            continue;
        }

        let item = snapshot.lanes.get_mut(lane).active.take().unwrap();
        if item.is_wait {
            continue;
        }

        apply_completion_effects(snapshot, lane, &item);
        snapshot
            .lanes
            .get_mut(lane)
            .completion_history
            .push(item);
    }
}

fn apply_completion_effects(
    snapshot: &mut PlanetSnapshot,
    lane: Lane,
    item: &crate::core::WorkItem,
) {
    let Some(def) = snapshot.defs.get(&item.item_id).cloned() else {
        return;
    };
    let qty = item.quantity;

    *snapshot
        .completed_counts
        .entry(item.item_id.clone())
        .or_insert(0) += qty;

    let effects = &def.effects_on_complete;
    snapshot.housing.worker_cap += effects.worker_cap * qty as i64;
    snapshot.housing.soldier_cap += effects.soldier_cap * qty as i64;
    snapshot.housing.scientist_cap += effects.scientist_cap * qty as i64;
    snapshot.planet_limit += effects.planet_limit * qty as i64;

    match def.kind {
        ItemKind::Colonist => {
            let qty_i64 = qty as i64;
            match def.colonist_kind {
                Some(ColonistKind::Soldier) => snapshot.population.soldiers += qty_i64,
                Some(ColonistKind::Scientist) => snapshot.population.scientists += qty_i64,
                None => {}
            }
            snapshot.population.workers_total -= qty_i64;
            *snapshot.population.busy_by_lane.get_mut(lane) -= qty_i64;
        }
        ItemKind::Research => {
            if !snapshot.completed_research.contains(&item.item_id) {
                snapshot.completed_research.push(item.item_id.clone());
            }
        }
        ItemKind::Structure | ItemKind::Ship => {}
    }
}
