// Shared fixtures for the end-to-end scenario tests. Integration test
// binaries only see the crate's public API, so this mirrors (rather than
// reuses) the in-crate `test_utils` fixture catalogue.
use outpost_ledger::core::{Catalogue, PlanetSnapshot};
use outpost_ledger::timeline::Timeline;
use std::sync::Arc;

pub fn standard_catalogue() -> Arc<Catalogue> {
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
            },
            {
                "id": "research_lab",
                "name": "Research Lab",
                "lane": "building",
                "type": "structure",
                "durationTurns": 5,
                "costsPerUnit": { "resources": { "metal": 300.0 }, "workers": 0, "space": 1 },
                "upkeepPerUnit": { "energy": 10.0 },
                "effectsOnComplete": { "production": { "research_points": 5.0 } }
            },
            {
                "id": "metal_mine",
                "name": "Metal Mine",
                "lane": "building",
                "type": "structure",
                "durationTurns": 6,
                "costsPerUnit": { "resources": { "mineral": 100.0 }, "workers": 2, "space": 1 },
                "effectsOnComplete": { "production": { "metal": 25.0 } }
            },
            {
                "id": "barracks",
                "name": "Barracks",
                "lane": "building",
                "type": "structure",
                "durationTurns": 3,
                "costsPerUnit": { "resources": { "metal": 100.0 }, "workers": 0, "space": 1 },
                "maxPerPlanet": 1,
                "effectsOnComplete": { "soldierCap": 50 }
            },
            {
                "id": "shipyard",
                "name": "Shipyard",
                "lane": "building",
                "type": "structure",
                "durationTurns": 2,
                "costsPerUnit": { "resources": { "metal": 120.0, "mineral": 60.0 }, "workers": 4, "space": 2 }
            }
        ],
        "units": [
            {
                "id": "fighter",
                "name": "Fighter",
                "lane": "ship",
                "type": "ship",
                "durationTurns": 3,
                "costsPerUnit": { "resources": { "metal": 10.0 }, "workers": 0, "space": 0 }
            }
        ],
        "colonists": [
            {
                "id": "soldier_unit",
                "name": "Soldier",
                "lane": "colonist",
                "type": "colonist",
                "colonistKind": "soldier",
                "durationTurns": 2,
                "costsPerUnit": { "resources": { "food": 20.0 }, "workers": 1, "space": 0 },
                "prerequisites": ["barracks"]
            }
        ],
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
    Arc::new(Catalogue::from_json_value(raw).expect("fixture catalogue must be valid"))
}

pub fn standard_timeline() -> Timeline {
    Timeline::new(PlanetSnapshot::standard_start(standard_catalogue()))
}
