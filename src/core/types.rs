// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for an item definition in the catalogue.
pub type ItemId = String;

/// Unique identifier for a work item within a lane's lifetime.
pub type WorkItemId = u64;

/// The turn index a snapshot belongs to. Zero-based internally; the command
/// surface's consumers may translate to the 1-based turn numbers shown to
/// players (see spec's Open Question on turn indexing).
pub type Turn = u32;

/// One of the four pipelines a work item can flow through. At most one
/// item is active per lane at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Building,
    Ship,
    Colonist,
    Research,
}

impl Lane {
    /// Deterministic activation/completion order for a single turn.
    pub const ORDER: [Lane; 4] = [Lane::Building, Lane::Ship, Lane::Colonist, Lane::Research];
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Lane::Building => "building",
            Lane::Ship => "ship",
            Lane::Colonist => "colonist",
            Lane::Research => "research",
        };
        write!(f, "{}", name)
    }
}

/// The broad category of an item definition, used to pick effect-application
/// and space/housing accounting rules on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Structure,
    Ship,
    Colonist,
    Research,
}

/// Which population bucket a completed colonist item feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColonistKind {
    Soldier,
    Scientist,
}

/// The closed set of resources tracked by a planet. A plain struct with one
/// field per resource (rather than a generic map) keeps arithmetic on stocks,
/// abundance, and per-unit costs branch-free and `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ResourceTable {
    pub metal: f64,
    pub mineral: f64,
    pub food: f64,
    pub energy: f64,
    pub research_points: f64,
}

/// Which resource field is being addressed; used for iteration and for
/// selector/warning messages that need to name a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Metal,
    Mineral,
    Food,
    Energy,
    ResearchPoints,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Metal,
        Resource::Mineral,
        Resource::Food,
        Resource::Energy,
        Resource::ResearchPoints,
    ];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Metal => "metal",
            Resource::Mineral => "mineral",
            Resource::Food => "food",
            Resource::Energy => "energy",
            Resource::ResearchPoints => "research_points",
        };
        write!(f, "{}", name)
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self {
            metal: 0.0,
            mineral: 0.0,
            food: 0.0,
            energy: 0.0,
            research_points: 0.0,
        }
    }
}

impl ResourceTable {
    /// A table where every resource is zero; the natural default for stocks,
    /// production, and per-unit costs.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A table where every resource is `value`; used to build the default
    /// 1.0 abundance multiplier.
    pub fn uniform(value: f64) -> Self {
        Self {
            metal: value,
            mineral: value,
            food: value,
            energy: value,
            research_points: value,
        }
    }

    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Metal => self.metal,
            Resource::Mineral => self.mineral,
            Resource::Food => self.food,
            Resource::Energy => self.energy,
            Resource::ResearchPoints => self.research_points,
        }
    }

    pub fn get_mut(&mut self, resource: Resource) -> &mut f64 {
        match resource {
            Resource::Metal => &mut self.metal,
            Resource::Mineral => &mut self.mineral,
            Resource::Food => &mut self.food,
            Resource::Energy => &mut self.energy,
            Resource::ResearchPoints => &mut self.research_points,
        }
    }

    /// Iterates all five `(resource, value)` pairs in `Resource::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, f64)> + '_ {
        Resource::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    pub fn add_assign(&mut self, other: &ResourceTable) {
        self.metal += other.metal;
        self.mineral += other.mineral;
        self.food += other.food;
        self.energy += other.energy;
        self.research_points += other.research_points;
    }

    pub fn sub_assign(&mut self, other: &ResourceTable) {
        self.metal -= other.metal;
        self.mineral -= other.mineral;
        self.food -= other.food;
        self.energy -= other.energy;
        self.research_points -= other.research_points;
    }

    pub fn scaled(&self, factor: f64) -> ResourceTable {
        ResourceTable {
            metal: self.metal * factor,
            mineral: self.mineral * factor,
            food: self.food * factor,
            energy: self.energy * factor,
            research_points: self.research_points * factor,
        }
    }

    /// True iff every resource in `self` is >= the corresponding resource in `cost`.
    pub fn can_afford(&self, cost: &ResourceTable) -> bool {
        Resource::ALL.iter().all(|&r| self.get(r) >= cost.get(r))
    }
}

/// Ground and orbital construction footprint, used and capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub ground_used: i64,
    pub ground_cap: i64,
    pub orbital_used: i64,
    pub orbital_cap: i64,
}

/// Housing capacity for each population category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Housing {
    pub worker_cap: i64,
    pub soldier_cap: i64,
    pub scientist_cap: i64,
}

/// Work-in-progress reservation counts, one bucket per lane. Workers
/// reserved for a lane's active item are "busy" until the item completes
/// (structures/ships/research keep their staff busy permanently; colonists
/// convert out of the worker pool entirely — see `scheduler::complete`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneCounts {
    pub building: i64,
    pub ship: i64,
    pub colonist: i64,
    pub research: i64,
}

impl LaneCounts {
    pub fn get(&self, lane: Lane) -> i64 {
        match lane {
            Lane::Building => self.building,
            Lane::Ship => self.ship,
            Lane::Colonist => self.colonist,
            Lane::Research => self.research,
        }
    }

    pub fn get_mut(&mut self, lane: Lane) -> &mut i64 {
        match lane {
            Lane::Building => &mut self.building,
            Lane::Ship => &mut self.ship,
            Lane::Colonist => &mut self.colonist,
            Lane::Research => &mut self.research,
        }
    }

    pub fn sum(&self) -> i64 {
        self.building + self.ship + self.colonist + self.research
    }
}

/// Civilian and military population on the planet.
///
/// Invariant: `workers_idle + busy_by_lane.sum() == workers_total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub workers_total: i64,
    pub workers_idle: i64,
    pub soldiers: i64,
    pub scientists: i64,
    pub busy_by_lane: LaneCounts,
}

/// Per-unit deltas applied when a work item's quantity finishes construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectsOnComplete {
    /// Production added per resource per completed unit (scaled by abundance
    /// when the item definition is `is_abundance_scaled`).
    pub production: ResourceTable,
    pub worker_cap: i64,
    pub soldier_cap: i64,
    pub scientist_cap: i64,
    pub planet_limit: i64,
    /// Per-unit growth-rate bonus contributed while this item is completed
    /// (see `systems::growth`).
    pub growth_bonus_per_unit: f64,
    pub unlocks_research: Vec<ItemId>,
    pub unlocks_structure: Vec<ItemId>,
    pub unlocks_unit: Vec<ItemId>,
}

/// Per-unit resource, worker, and space cost of a single item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemCost {
    pub resources: ResourceTable,
    pub workers: i64,
    pub space: i64,
}

/// An immutable item specification loaded from the content catalogue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub lane: Lane,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tier: Option<u32>,
    pub duration_turns: u32,
    pub costs_per_unit: ItemCost,
    #[serde(default)]
    pub upkeep_per_unit: ResourceTable,
    #[serde(default)]
    pub prerequisites: Vec<ItemId>,
    #[serde(default)]
    pub is_abundance_scaled: bool,
    #[serde(default)]
    pub max_per_planet: Option<u32>,
    #[serde(default)]
    pub colonist_kind: Option<ColonistKind>,
    #[serde(default)]
    pub effects_on_complete: EffectsOnComplete,
}

impl ItemDef {
    /// Whether this item's space cost draws from the orbital pool rather
    /// than the ground pool.
    pub fn is_orbital(&self) -> bool {
        self.subcategory.as_deref() == Some("orbital_facility")
    }
}

/// A single entry flowing through a lane: either a real construction order
/// or a synthetic wait placeholder (see `scheduler`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub item_id: ItemId,
    pub quantity: u32,
    pub turns_remaining: u32,
    pub queued_turn: Turn,
    pub start_turn: Option<Turn>,
    pub completion_turn: Option<Turn>,
    pub is_wait: bool,
}

/// One lane's pending queue, active item, and completion history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaneState {
    pub active: Option<WorkItem>,
    pub pending_queue: Vec<WorkItem>,
    pub completion_history: Vec<WorkItem>,
    pub max_queue_depth: u32,
}

/// The four lane states, addressed either by field or by `Lane` enum value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lanes {
    pub building: LaneState,
    pub ship: LaneState,
    pub colonist: LaneState,
    pub research: LaneState,
}

impl Lanes {
    pub fn get(&self, lane: Lane) -> &LaneState {
        match lane {
            Lane::Building => &self.building,
            Lane::Ship => &self.ship,
            Lane::Colonist => &self.colonist,
            Lane::Research => &self.research,
        }
    }

    pub fn get_mut(&mut self, lane: Lane) -> &mut LaneState {
        match lane {
            Lane::Building => &mut self.building,
            Lane::Ship => &mut self.ship,
            Lane::Colonist => &mut self.colonist,
            Lane::Research => &mut self.research,
        }
    }
}

/// Counts of completed items by id, kept sorted for deterministic iteration
/// (net-output summation order has no semantic effect, but stable debug
/// output and serialization are worth the `BTreeMap`).
pub type CompletedCounts = BTreeMap<ItemId, u32>;
