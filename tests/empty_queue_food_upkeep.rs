mod common;

use outpost_ledger::config::FOOD_PER_CAPITA;

#[test]
fn food_drains_by_exact_upkeep_with_no_queued_work() {
    let mut timeline = common::standard_timeline();
    let start = timeline.current_view().clone();
    let capita = (start.population.workers_total
        + start.population.soldiers
        + start.population.scientists) as f64;

    timeline.simulate_turns(10).expect("advance must not violate invariants");
    timeline.set_view(timeline.latest_turn());
    let after = timeline.current_view();

    let expected_food = start.stocks.food - 10.0 * capita * FOOD_PER_CAPITA;
    assert!((after.stocks.food - expected_food).abs() < 1e-9);

    // worker_cap starts at zero (no housing structure completed yet), so
    // growth stays clamped to zero regardless of food.
    assert_eq!(after.population.workers_total, start.population.workers_total);
    assert_eq!(after.population.workers_idle, start.population.workers_idle);
}
