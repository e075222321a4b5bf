// src/main.rs
use outpost_ledger::core::{Catalogue, Lane, PlannerResult, PlanetSnapshot};
use outpost_ledger::selectors;
use outpost_ledger::timeline::Timeline;
use outpost_ledger::{commands, config};
use std::sync::Arc;

fn demo_catalogue() -> Arc<Catalogue> {
    let raw = serde_json::json!({
        "structures": [
            {
                "id": "outpost",
                "name": "Outpost",
                "lane": "building",
                "type": "structure",
                "durationTurns": 1,
                "costsPerUnit": { "resources": {}, "workers": 0, "space": 1 }
            },
            {
                "id": "farm",
                "name": "Farm",
                "lane": "building",
                "type": "structure",
                "durationTurns": 4,
                "costsPerUnit": { "resources": { "metal": 200.0 }, "workers": 0, "space": 1 },
                "isAbundanceScaled": true,
                "effectsOnComplete": { "production": { "food": 50.0 } }
            },
            {
                "id": "solar_generator",
                "name": "Solar Generator",
                "lane": "building",
                "type": "structure",
                "durationTurns": 3,
                "costsPerUnit": { "resources": { "metal": 150.0 }, "workers": 0, "space": 1 },
                "effectsOnComplete": { "production": { "energy": 30.0 } }
            }
        ],
        "units": [],
        "colonists": [],
        "research": [
            {
                "id": "orbital_expansion",
                "name": "Orbital Expansion",
                "lane": "research",
                "type": "research",
                "durationTurns": 3,
                "costsPerUnit": { "resources": { "mineral": 80.0 }, "workers": 0, "space": 0 },
                "effectsOnComplete": { "planetLimit": 1 }
            }
        ]
    });
    Arc::new(Catalogue::from_json_value(raw).expect("demo catalogue must be valid"))
}

fn print_summary(timeline: &Timeline) {
    let summary = selectors::planet_summary(timeline.current_view());
    println!(
        "turn {}: metal={:.1} food={:.1} energy={:.1} {}",
        summary.turn, summary.stocks.metal, summary.stocks.food, summary.stocks.energy,
        summary.growth_hint
    );
    for warning in selectors::warnings(timeline.current_view()) {
        println!("  warning[{}]: {}", warning.severity, warning.message);
    }
}

fn main() -> PlannerResult<()> {
    println!("outpost-ledger demo (v{})", outpost_ledger::VERSION);

    let catalogue = demo_catalogue();
    let start = PlanetSnapshot::standard_start(catalogue);
    let mut timeline = Timeline::new(start);

    print_summary(&timeline);

    let t = timeline.view_index();
    match commands::queue_item(&mut timeline, t, Lane::Building, "farm", 1) {
        Ok(()) => println!("queued 1x farm at turn {}", t + 1),
        Err(e) => println!("queue rejected: {:?}", e),
    }

    commands::simulate_ahead(&mut timeline, 5)?;
    timeline.set_view(timeline.latest_turn());
    print_summary(&timeline);

    for entry in selectors::lane_view(timeline.current_view(), Lane::Building) {
        println!(
            "  building lane: {:?} {} x{} (remaining {})",
            entry.status, entry.item_name, entry.quantity, entry.turns_remaining
        );
    }

    println!(
        "default max queue depth used by fresh lanes: {}",
        config::DEFAULT_MAX_QUEUE_DEPTH
    );

    Ok(())
}
