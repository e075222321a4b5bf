mod common;

use common::standard_timeline;
use outpost_ledger::core::Lane;
use outpost_ledger::commands;

/// Queuing and completing a research-lane item should land it in
/// `completed_research` and apply its `planetLimit` bonus, exercising the
/// fourth lane of the scheduler end to end.
#[test]
fn research_item_completes_and_raises_planet_limit() {
    let mut timeline = standard_timeline();
    let t = timeline.view_index();
    let before_limit = timeline.current_view().planet_limit;

    commands::queue_item(&mut timeline, t, Lane::Research, "orbital_expansion", 1).unwrap();
    commands::simulate_ahead(&mut timeline, 3).unwrap();
    timeline.set_view(timeline.latest_turn());

    let snapshot = timeline.current_view();
    assert!(snapshot
        .completed_research
        .contains(&"orbital_expansion".to_string()));
    assert_eq!(snapshot.planet_limit, before_limit + 1);
}
