// src/systems/growth.rs
use crate::core::PlanetSnapshot;

/// Computes the projected worker increment for the next turn: zero while
/// food stocks are non-positive or the worker cap is already reached,
/// otherwise `floor(workersTotal * effectiveRate)` clamped to the remaining
/// headroom under `workerCap`.
pub fn projected_growth(snapshot: &PlanetSnapshot) -> i64 {
    let population = &snapshot.population;
    let worker_cap = snapshot.housing.worker_cap;

    if snapshot.stocks.food <= 0.0 || population.workers_total >= worker_cap {
        return 0;
    }

    let growth_bonus = growth_bonus(snapshot);
    let effective_rate = crate::config::WORKER_GROWTH_BASE + growth_bonus;
    let raw = (population.workers_total as f64 * effective_rate).floor() as i64;

    raw.min(worker_cap - population.workers_total).max(0)
}

/// Sum of `growthBonusPerUnit` across completed items, scaled by count.
fn growth_bonus(snapshot: &PlanetSnapshot) -> f64 {
    snapshot
        .completed_counts
        .iter()
        .filter_map(|(item_id, &count)| {
            snapshot
                .defs
                .get(item_id)
                .map(|def| def.effects_on_complete.growth_bonus_per_unit * count as f64)
        })
        .sum()
}
