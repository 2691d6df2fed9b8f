use haunt_core::{
    Building, Director, GhostPlacement, GhostState, HunterState, NullSink, RecordingSink, RoomGraph,
    SimEvent, Verdict,
};
use haunt_rules::{EvidenceKind, GhostArchetype, HouseLayout, HunterProfile, RoomId, SimConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("Hunter {n}")).collect()
}

fn default_building(seed: u64) -> Building {
    let layout = HouseLayout::default_house().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    Building::assemble(&layout, names(4), SimConfig::without_delays(), &mut rng).unwrap()
}

#[test]
fn test_full_round_reaches_terminal_states() {
    for seed in 0..5 {
        let building = default_building(seed);
        let outcome = Director::new().play(&building, &NullSink).unwrap();

        assert_eq!(outcome.hunters.len(), 4);
        assert!(outcome.hunters.iter().all(|h| h.state.is_terminal()));
        assert_eq!(outcome.ghost.state, GhostState::Bored);
    }
}

#[test]
fn test_occupancy_matches_final_agents() {
    let building = default_building(11);
    let outcome = Director::new().play(&building, &NullSink).unwrap();
    let occupancy = building.occupancy();

    for hunter in &outcome.hunters {
        assert_eq!(occupancy.hunters[&hunter.id], vec![hunter.room], "{}", hunter.name);
    }
    assert_eq!(occupancy.ghost, vec![outcome.ghost.room]);
}

#[test]
fn test_occupancy_holds_across_repeated_rounds() {
    let building = default_building(13);
    let director = Director::new();

    for round in 0..3 {
        let outcome = director.play(&building, &NullSink).unwrap();
        let occupancy = building.occupancy();
        for hunter in &outcome.hunters {
            assert_eq!(
                occupancy.hunters[&hunter.id],
                vec![hunter.room],
                "round {round}: {}",
                hunter.name
            );
        }
        assert_eq!(occupancy.ghost, vec![outcome.ghost.room], "round {round}");
    }
}

#[test]
fn test_fear_stays_within_ceiling() {
    let config = SimConfig {
        fear_ceiling: 10,
        ..SimConfig::without_delays()
    };
    let layout = HouseLayout::new(["Van", "Crypt"]).with_connection("Van", "Crypt");
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let building = Building::assemble(&layout, names(3), config.clone(), &mut rng).unwrap();
        let outcome = Director::new().play(&building, &NullSink).unwrap();

        for hunter in &outcome.hunters {
            assert!(hunter.fear.level <= 10);
            if hunter.state == HunterState::ScaredAway {
                assert_eq!(hunter.fear.level, 10);
            }
        }
    }
}

#[test]
fn test_lone_fingerprint_hunter_never_wins() {
    let layout = HouseLayout::new(["Van", "Attic"]).with_connection("Van", "Attic");
    let graph = RoomGraph::from_layout(&layout).unwrap();
    let ghost = GhostPlacement {
        archetype: GhostArchetype::Bullies,
        room: RoomId(1),
    };
    let hunters = vec![HunterProfile::new("Ada", EvidenceKind::Fingerprints)];
    let building = Building::new(graph, hunters, ghost, SimConfig::without_delays()).unwrap();

    let report = Director::new().run(&building, &NullSink).unwrap();

    let ada = &report.hunters[0];
    assert!(matches!(ada.state, HunterState::Bored | HunterState::ScaredAway));
    assert!(ada.discovered.iter().all(|kind| *kind == EvidenceKind::Fingerprints));
    assert_eq!(report.ghost.state, GhostState::Bored);
}

#[test]
fn test_hunters_never_discover_the_missing_kind() {
    for seed in 20..25 {
        let building = default_building(seed);
        let report = Director::new().run(&building, &NullSink).unwrap();
        let missing = building.ghost.archetype.missing_kind();

        for hunter in &report.hunters {
            assert!(!hunter.discovered.contains(&missing));
            if hunter.state == HunterState::Won {
                assert!(hunter.discovered.len() >= 3);
            }
        }
    }
}

#[test]
fn test_verdict_follows_hunter_states() {
    let building = default_building(7);
    let report = Director::new().run(&building, &NullSink).unwrap();

    let all_scared = report.hunters.iter().all(|h| h.state == HunterState::ScaredAway);
    match report.verdict {
        Verdict::GhostWins => assert!(all_scared),
        Verdict::HuntersWin { missing_kind } => {
            assert!(!all_scared);
            assert_eq!(missing_kind, building.ghost.archetype.missing_kind());
        }
    }
}

#[test]
fn test_narrative_is_bracketed() {
    let building = default_building(3);
    let sink = RecordingSink::new();
    Director::new().run(&building, &sink).unwrap();

    let events = sink.events();
    assert!(matches!(events.first(), Some(SimEvent::RoundStarted { .. })));
    assert!(matches!(events.last(), Some(SimEvent::RoundOver { .. })));

    let finished = events
        .iter()
        .filter(|e| matches!(e, SimEvent::HunterFinished { .. }))
        .count();
    assert_eq!(finished, 4);
    let ghost_done = events
        .iter()
        .filter(|e| matches!(e, SimEvent::GhostFinished { .. }))
        .count();
    assert_eq!(ghost_done, 1);
}

#[test]
fn test_custom_layout_from_toml() {
    let layout = HouseLayout::from_toml_str(
        r#"
        rooms = ["Van", "Porch", "Cellar"]
        connections = [["Van", "Porch"], ["Porch", "Cellar"]]
        "#,
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let building = Building::assemble(&layout, names(6), SimConfig::without_delays(), &mut rng).unwrap();
    assert_ne!(building.ghost.room, building.graph.start_room());

    let report = Director::new().run(&building, &NullSink).unwrap();
    assert_eq!(report.hunters.len(), 6);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["hunters"].as_array().map(Vec::len), Some(6));
}
