// src/selectors.rs
use crate::core::{CompletedCounts, ItemKind, Lane, PlanetSnapshot, ResourceTable, Turn, WorkItemId};
use crate::systems::net_outputs;

/// Read-only projection of a planet's current state for presentation.
/// Selectors never mutate a snapshot; they only compute derived views.
#[derive(Debug, Clone)]
pub struct PlanetSummary {
    pub turn: Turn,
    pub stocks: ResourceTable,
    pub abundance: ResourceTable,
    pub outputs_per_turn: ResourceTable,
    pub space: crate::core::Space,
    pub housing: crate::core::Housing,
    pub population: crate::core::Population,
    pub completed_counts: crate::core::CompletedCounts,
    /// `completed_counts` filtered to ids whose definition is a ship.
    pub ships: crate::core::CompletedCounts,
    /// `completed_counts` filtered to ids whose definition is a structure.
    pub structures: crate::core::CompletedCounts,
    pub growth_hint: String,
    pub food_upkeep: f64,
    pub planet_limit: i64,
    pub completed_research: Vec<String>,
}

/// Splits `completed_counts` by each id's catalogue `ItemKind`. An id with
/// no resolving def (a removed catalogue entry) is dropped from both.
fn completed_counts_by_kind(snapshot: &PlanetSnapshot) -> (CompletedCounts, CompletedCounts) {
    let mut ships = CompletedCounts::new();
    let mut structures = CompletedCounts::new();
    for (id, &count) in snapshot.completed_counts.iter() {
        let Some(def) = snapshot.defs.get(id) else {
            continue;
        };
        match def.kind {
            ItemKind::Ship => {
                ships.insert(id.clone(), count);
            }
            ItemKind::Structure => {
                structures.insert(id.clone(), count);
            }
            ItemKind::Colonist | ItemKind::Research => {}
        }
    }
    (ships, structures)
}

pub fn planet_summary(snapshot: &PlanetSnapshot) -> PlanetSummary {
    let outputs = net_outputs(snapshot);
    let capita = (snapshot.population.workers_total
        + snapshot.population.soldiers
        + snapshot.population.scientists) as f64;
    let food_upkeep = capita * crate::config::FOOD_PER_CAPITA;

    let growth_hint = if snapshot.stocks.food <= 0.0 {
        "growth halted: no food".to_string()
    } else if snapshot.population.workers_total >= snapshot.housing.worker_cap {
        "growth halted: worker cap reached".to_string()
    } else {
        let growth = crate::systems::projected_growth(snapshot);
        format!("+{} workers projected next turn", growth)
    };

    let (ships, structures) = completed_counts_by_kind(snapshot);

    PlanetSummary {
        turn: snapshot.current_turn + 1,
        stocks: snapshot.stocks,
        abundance: snapshot.abundance,
        outputs_per_turn: outputs,
        space: snapshot.space,
        housing: snapshot.housing,
        population: snapshot.population,
        completed_counts: snapshot.completed_counts.clone(),
        ships,
        structures,
        growth_hint,
        food_upkeep,
        planet_limit: snapshot.planet_limit,
        completed_research: snapshot.completed_research.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone)]
pub struct LaneEntryView {
    pub id: WorkItemId,
    pub item_id: String,
    pub item_name: String,
    pub status: EntryStatus,
    pub quantity: u32,
    pub turns_remaining: u32,
    pub eta: Option<Turn>,
    pub queued_turn: Turn,
    pub start_turn: Option<Turn>,
    pub completion_turn: Option<Turn>,
    pub invalid: bool,
    pub invalid_reason: Option<String>,
    pub missing_prereqs: Vec<String>,
}

/// Ordered view of `lane`'s entries: completed history reversed (most
/// recent first), then pending in queue order, then the active entry.
pub fn lane_view(snapshot: &PlanetSnapshot, lane: Lane) -> Vec<LaneEntryView> {
    let lane_state = snapshot.lanes.get(lane);
    let mut entries = Vec::new();

    for item in lane_state.completion_history.iter().rev() {
        entries.push(to_view(snapshot, item, EntryStatus::Completed));
    }
    for item in lane_state.pending_queue.iter() {
        entries.push(to_view(snapshot, item, EntryStatus::Pending));
    }
    if let Some(item) = lane_state.active.as_ref() {
        entries.push(to_view(snapshot, item, EntryStatus::Active));
    }

    entries
}

fn to_view(
    snapshot: &PlanetSnapshot,
    item: &crate::core::WorkItem,
    status: EntryStatus,
) -> LaneEntryView {
    let def = snapshot.defs.get(&item.item_id);
    let item_name = def
        .map(|d| d.name.clone())
        .unwrap_or_else(|| item.item_id.clone());

    let missing_prereqs: Vec<String> = def
        .map(|d| {
            d.prerequisites
                .iter()
                .filter(|p| !snapshot.prerequisite_satisfied(p))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    LaneEntryView {
        id: item.id,
        item_id: item.item_id.clone(),
        item_name,
        status,
        quantity: item.quantity,
        turns_remaining: item.turns_remaining,
        eta: item.completion_turn,
        queued_turn: item.queued_turn,
        start_turn: item.start_turn,
        completion_turn: item.completion_turn,
        invalid: status == EntryStatus::Pending && !missing_prereqs.is_empty(),
        invalid_reason: if missing_prereqs.is_empty() {
            None
        } else {
            Some("missing prerequisites".to_string())
        },
        missing_prereqs,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    NegativeEnergy,
    NoFood,
    HousingFull,
    SpaceFull,
}

#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningType,
    pub message: String,
    pub severity: &'static str,
}

/// Surfaces capacity and resource warnings; a capacity counts as near-full
/// at or above `NEAR_FULL_THRESHOLD`.
pub fn warnings(snapshot: &PlanetSnapshot) -> Vec<Warning> {
    let mut out = Vec::new();

    let next_outputs = net_outputs(snapshot);
    if snapshot.stocks.energy + next_outputs.energy < 0.0 {
        out.push(Warning {
            kind: WarningType::NegativeEnergy,
            message: "projected energy output is negative".to_string(),
            severity: "error",
        });
    }
    if snapshot.stocks.food <= 0.0 {
        out.push(Warning {
            kind: WarningType::NoFood,
            message: "food stocks depleted; growth halted".to_string(),
            severity: "warning",
        });
    }

    let near_full = |used: i64, cap: i64| cap > 0 && used as f64 / cap as f64 >= crate::config::NEAR_FULL_THRESHOLD;

    if near_full(snapshot.population.soldiers, snapshot.housing.soldier_cap)
        || near_full(snapshot.population.scientists, snapshot.housing.scientist_cap)
        || near_full(snapshot.population.workers_total, snapshot.housing.worker_cap)
    {
        out.push(Warning {
            kind: WarningType::HousingFull,
            message: "housing capacity is nearly full".to_string(),
            severity: "warning",
        });
    }

    if near_full(snapshot.space.ground_used, snapshot.space.ground_cap)
        || near_full(snapshot.space.orbital_used, snapshot.space.orbital_cap)
    {
        out.push(Warning {
            kind: WarningType::SpaceFull,
            message: "construction space is nearly full".to_string(),
            severity: "warning",
        });
    }

    out
}

/// Earliest turn in `[from, to]` where `lane` has neither an active nor a
/// pending item, searching snapshots already present in the timeline.
pub fn first_empty_turn(
    timeline: &crate::timeline::Timeline,
    lane: Lane,
    from: usize,
    to: usize,
) -> Option<usize> {
    for t in from..=to {
        let snapshot = timeline.get_state_at(t)?;
        let lane_state = snapshot.lanes.get(lane);
        if lane_state.active.is_none() && lane_state.pending_queue.is_empty() {
            return Some(t);
        }
    }
    None
}
