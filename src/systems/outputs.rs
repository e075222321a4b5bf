// src/systems/outputs.rs
use crate::core::{PlanetSnapshot, Resource, ResourceTable};

/// Per-turn delta applied to a planet's stocks. Produced by `net_outputs`
/// and added to `stocks` during the outputs phase of `advance`.
pub type NetOutputs = ResourceTable;

/// Computes the next-turn resource delta for a snapshot: completed items'
/// production (abundance-scaled where flagged) minus their upkeep, minus
/// population food consumption, plus scientist research output.
///
/// Food upkeep reduces the food output rather than being deducted from
/// stocks directly, so the planner's projections show it as a visible
/// negative contributor rather than a silent subtraction.
pub fn net_outputs(snapshot: &PlanetSnapshot) -> NetOutputs {
    let mut totals = ResourceTable::zero();

    for (item_id, &count) in snapshot.completed_counts.iter() {
        if count == 0 {
            continue;
        }
        let Some(def) = snapshot.defs.get(item_id) else {
            continue;
        };
        let count = count as f64;
        for resource in Resource::ALL {
            let production = def.effects_on_complete.production.get(resource);
            let scaled = if def.is_abundance_scaled {
                production * snapshot.abundance.get(resource)
            } else {
                production
            };
            *totals.get_mut(resource) += scaled * count;
            *totals.get_mut(resource) -= def.upkeep_per_unit.get(resource) * count;
        }
    }

    let population = &snapshot.population;
    let capita = (population.workers_total + population.soldiers + population.scientists) as f64;
    totals.food -= capita * crate::config::FOOD_PER_CAPITA;

    totals.research_points +=
        population.scientists as f64 * crate::config::RESEARCH_POINTS_PER_SCIENTIST;

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalogue;
    use std::sync::Arc;

    fn snapshot_with(defs: Arc<Catalogue>) -> PlanetSnapshot {
        PlanetSnapshot::standard_start(defs)
    }

    #[test]
    fn empty_catalogue_yields_only_food_upkeep() {
        let snap = snapshot_with(Arc::new(Catalogue::default()));
        let outputs = net_outputs(&snap);
        let expected_food =
            -(snap.population.workers_total as f64 * crate::config::FOOD_PER_CAPITA);
        assert!((outputs.food - expected_food).abs() < 1e-9);
        assert_eq!(outputs.metal, 0.0);
        assert_eq!(outputs.research_points, 0.0);
    }

    #[test]
    fn scientists_produce_research_points() {
        let mut snap = snapshot_with(Arc::new(Catalogue::default()));
        snap.population.scientists = 3;
        let outputs = net_outputs(&snap);
        assert_eq!(outputs.research_points, 3.0);
    }
}
