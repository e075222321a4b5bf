// src/commands.rs
use crate::core::{ErrorKind, Lane, PlannerResult, Turn, WorkItem, WorkItemId};
use crate::systems::validation::static_validate;
use crate::timeline::Timeline;

/// Result of a command-surface call: either it applied (and the timeline
/// mutated), or it failed with one of the non-exceptional error kinds and
/// the timeline was left untouched. `INVARIANT_VIOLATED` never flows
/// through here — see `PlannerError` for that fatal path.
pub type CommandOutcome = Result<(), ErrorKind>;

/// Queues `quantity` units of `item_id` onto the tail of `lane`'s pending
/// queue at turn `t`, after static validation (spec §4.3). On success,
/// truncates the timeline at `t` and leaves the caller to `simulate_turns`
/// back out to the view range.
pub fn queue_item(
    timeline: &mut Timeline,
    t: usize,
    lane: Lane,
    item_id: &str,
    quantity: u32,
) -> CommandOutcome {
    let snapshot = timeline.get_state_at(t).ok_or(ErrorKind::NotFound)?;
    let def = snapshot.defs.get(item_id).ok_or(ErrorKind::NotFound)?.clone();
    static_validate(snapshot, lane, &def, quantity)?;

    let id = timeline.next_id();
    let item = WorkItem {
        id,
        item_id: item_id.to_string(),
        quantity,
        turns_remaining: def.duration_turns,
        queued_turn: t as Turn,
        start_turn: None,
        completion_turn: None,
        is_wait: false,
    };
    timeline.mutate_at(t, |snap| snap.lanes.get_mut(lane).pending_queue.push(item));
    Ok(())
}

/// Locates `entry_id` by id across `lane`'s pending queue and active slot
/// at turn `t`. If active, refunds the reserved (clamped) cost; removes
/// the entry either way.
pub fn cancel_entry_by_id(
    timeline: &mut Timeline,
    t: usize,
    lane: Lane,
    entry_id: WorkItemId,
) -> CommandOutcome {
    let snapshot = timeline.get_state_at(t).ok_or(ErrorKind::NotFound)?;
    let lane_state = snapshot.lanes.get(lane);

    if lane_state
        .pending_queue
        .iter()
        .any(|w| w.id == entry_id)
    {
        timeline.mutate_at(t, |snap| {
            snap.lanes
                .get_mut(lane)
                .pending_queue
                .retain(|w| w.id != entry_id);
        });
        return Ok(());
    }

    let is_active_match = lane_state
        .active
        .as_ref()
        .map(|w| w.id == entry_id)
        .unwrap_or(false);
    if !is_active_match {
        return Err(ErrorKind::NotFound);
    }

    timeline.mutate_at(t, |snap| {
        let item = snap.lanes.get_mut(lane).active.take();
        if let Some(item) = item {
            refund_active_item(snap, lane, &item);
        }
    });
    Ok(())
}

fn refund_active_item(snap: &mut crate::core::PlanetSnapshot, lane: Lane, item: &WorkItem) {
    if item.is_wait {
        return;
    }
    let Some(def) = snap.defs.get(&item.item_id).cloned() else {
        return;
    };
    let qty = item.quantity;

    for resource in crate::core::Resource::ALL {
        let cost = def.costs_per_unit.resources.get(resource) * qty as f64;
        *snap.stocks.get_mut(resource) += cost;
    }

    let workers_reserved = def.costs_per_unit.workers * qty as i64;
    if workers_reserved > 0 {
        snap.population.workers_idle += workers_reserved;
        *snap.population.busy_by_lane.get_mut(lane) -= workers_reserved;
    }

    let space_reserved = def.costs_per_unit.space * qty as i64;
    if space_reserved > 0 {
        if def.is_orbital() {
            snap.space.orbital_used -= space_reserved;
        } else {
            snap.space.ground_used -= space_reserved;
        }
    }
}

/// Searches the timeline from `hint_turn` backward for the turn at which
/// `entry_id` is present in `lane`, then delegates to `cancel_entry_by_id`.
/// Needed because ship/colonist entries may activate on a turn different
/// from the one they were queued at.
pub fn cancel_entry_by_smart(
    timeline: &mut Timeline,
    hint_turn: usize,
    lane: Lane,
    entry_id: WorkItemId,
) -> CommandOutcome {
    let mut t = hint_turn.min(timeline.latest_turn());
    loop {
        let snapshot = timeline.get_state_at(t).ok_or(ErrorKind::NotFound)?;
        let lane_state = snapshot.lanes.get(lane);
        let present = lane_state.pending_queue.iter().any(|w| w.id == entry_id)
            || lane_state.active.as_ref().map(|w| w.id == entry_id).unwrap_or(false);
        if present {
            return cancel_entry_by_id(timeline, t, lane, entry_id);
        }
        if t == 0 {
            return Err(ErrorKind::NotFound);
        }
        t -= 1;
    }
}

/// Cancels `entry_id` then re-queues the same item with `quantity`. If the
/// re-queue is rejected (the new quantity trips a housing/energy/planet-limit
/// check the original quantity didn't), the snapshot at `t` is restored to
/// exactly what it was before this call — commands never leave the timeline
/// truncated at a partial/failed intermediate state (spec §4.7).
pub fn set_quantity(
    timeline: &mut Timeline,
    t: usize,
    lane: Lane,
    entry_id: WorkItemId,
    quantity: u32,
) -> CommandOutcome {
    let snapshot = timeline.get_state_at(t).ok_or(ErrorKind::NotFound)?;
    let lane_state = snapshot.lanes.get(lane);
    let item_id = lane_state
        .pending_queue
        .iter()
        .chain(lane_state.active.iter())
        .find(|w| w.id == entry_id)
        .map(|w| w.item_id.clone())
        .ok_or(ErrorKind::NotFound)?;
    let original = snapshot.clone();

    cancel_entry_by_id(timeline, t, lane, entry_id)?;
    if let Err(e) = queue_item(timeline, t, lane, &item_id, quantity) {
        timeline.mutate_at(t, |snap| *snap = original.clone());
        return Err(e);
    }
    Ok(())
}

/// Moves `entry_id` to `new_index` in `lane`'s pending queue. If the entry
/// is currently active, it is first deactivated (refunded); recomputation
/// will attempt to reactivate the head in queue order on the next turn.
pub fn reorder(
    timeline: &mut Timeline,
    t: usize,
    lane: Lane,
    entry_id: WorkItemId,
    new_index: usize,
) -> CommandOutcome {
    let snapshot = timeline.get_state_at(t).ok_or(ErrorKind::NotFound)?;
    let lane_state = snapshot.lanes.get(lane);
    let is_active = lane_state.active.as_ref().map(|w| w.id == entry_id).unwrap_or(false);
    let in_queue = lane_state.pending_queue.iter().any(|w| w.id == entry_id);
    if !is_active && !in_queue {
        return Err(ErrorKind::NotFound);
    }

    timeline.mutate_at(t, |snap| {
        if is_active {
            if let Some(mut item) = snap.lanes.get_mut(lane).active.take() {
                refund_active_item(snap, lane, &item);
                item.start_turn = None;
                item.completion_turn = None;
                let lane_state = snap.lanes.get_mut(lane);
                let index = new_index.min(lane_state.pending_queue.len());
                lane_state.pending_queue.insert(index, item);
            }
        } else {
            let lane_state = snap.lanes.get_mut(lane);
            if let Some(pos) = lane_state.pending_queue.iter().position(|w| w.id == entry_id) {
                let item = lane_state.pending_queue.remove(pos);
                let index = new_index.min(lane_state.pending_queue.len());
                lane_state.pending_queue.insert(index, item);
            }
        }
    });

    Ok(())
}

/// Thin wrapper advancing the timeline `k` turns from its current tail.
pub fn simulate_ahead(timeline: &mut Timeline, k: usize) -> PlannerResult<()> {
    timeline.simulate_turns(k)
}

/// Thin wrapper advancing the timeline exactly one turn.
pub fn advance_one(timeline: &mut Timeline) -> PlannerResult<()> {
    timeline.simulate_turns(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalogue;
    use crate::core::PlanetSnapshot;
    use std::sync::Arc;

    fn catalogue_with_farm() -> Arc<Catalogue> {
        let raw = serde_json::json!({
            "structures": [{
                "id": "farm",
                "name": "Farm",
                "lane": "building",
                "type": "structure",
                "durationTurns": 4,
                "costsPerUnit": { "resources": { "metal": 200.0 }, "workers": 0, "space": 1 },
                "isAbundanceScaled": true,
                "effectsOnComplete": { "production": { "food": 50.0 } }
            }]
        });
        Arc::new(Catalogue::from_json_value(raw).unwrap())
    }

    fn fresh_timeline() -> Timeline {
        Timeline::new(PlanetSnapshot::standard_start(catalogue_with_farm()))
    }

    #[test]
    fn queue_then_cancel_restores_stocks() {
        let mut timeline = fresh_timeline();
        timeline.simulate_turns(1).unwrap();
        let before_metal = timeline.get_state_at(1).unwrap().stocks.metal;

        queue_item(&mut timeline, 1, Lane::Building, "farm", 1).unwrap();
        timeline.simulate_turns(1).unwrap();

        let active_id = timeline.get_state_at(2).unwrap().lanes.building.active.as_ref().unwrap().id;
        cancel_entry_by_id(&mut timeline, 2, Lane::Building, active_id).unwrap();

        assert_eq!(timeline.get_state_at(2).unwrap().stocks.metal, before_metal);
    }

    #[test]
    fn queue_item_rejects_unknown_id() {
        let mut timeline = fresh_timeline();
        let result = queue_item(&mut timeline, 0, Lane::Building, "ghost", 1);
        assert_eq!(result, Err(ErrorKind::NotFound));
    }

    #[test]
    fn cancel_unknown_entry_returns_not_found() {
        let mut timeline = fresh_timeline();
        let result = cancel_entry_by_id(&mut timeline, 0, Lane::Building, 9999);
        assert_eq!(result, Err(ErrorKind::NotFound));
    }

    fn catalogue_with_capped_soldier() -> Arc<Catalogue> {
        let raw = serde_json::json!({
            "colonists": [{
                "id": "soldier_unit",
                "name": "Soldier",
                "lane": "colonist",
                "type": "colonist",
                "colonistKind": "soldier",
                "durationTurns": 2,
                "costsPerUnit": { "resources": {}, "workers": 0, "space": 0 }
            }]
        });
        Arc::new(Catalogue::from_json_value(raw).unwrap())
    }

    #[test]
    fn set_quantity_restores_original_entry_on_rejection() {
        let catalogue = catalogue_with_capped_soldier();
        let mut start = PlanetSnapshot::standard_start(catalogue);
        start.housing.soldier_cap = 50;
        let mut timeline = Timeline::new(start);

        queue_item(&mut timeline, 0, Lane::Colonist, "soldier_unit", 10).unwrap();
        let before = timeline.get_state_at(0).unwrap().clone();
        let entry_id = before.lanes.colonist.pending_queue[0].id;

        // 100 would overshoot the 50-soldier cap and gets rejected; the
        // original 10-unit entry must still be there afterward, unchanged.
        let result = set_quantity(&mut timeline, 0, Lane::Colonist, entry_id, 100);
        assert_eq!(result, Err(ErrorKind::HousingMissing));

        let after = timeline.get_state_at(0).unwrap();
        assert_eq!(after.lanes.colonist.pending_queue.len(), 1);
        assert_eq!(after.lanes.colonist.pending_queue[0].id, entry_id);
        assert_eq!(after.lanes.colonist.pending_queue[0].quantity, 10);
    }
}
