//! Round-trip test for the optimal-policy JSON export

use oxo::cli::commands::analyze::{AnalyzeArgs, PolicyMode, execute};
use oxo::Mark;

#[test]
fn exported_policy_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.json");

    let args = AnalyzeArgs {
        board: None,
        mark: Mark::X,
        export: Some(path.clone()),
        mode: PolicyMode::Single,
    };
    execute(args).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["computer"], "X");
    assert_eq!(value["mode"], "single");

    let policy = value["policy"].as_object().unwrap();
    assert_eq!(
        value["total_positions"].as_u64().unwrap() as usize,
        policy.len()
    );

    // The empty board is X's first decision state; ties resolve to the
    // first cell in row-major order, which is linear position 1
    assert_eq!(policy["........._X"], 1);

    // A position after one exchange is reachable and owned by X
    assert!(policy.contains_key("XO......._X"));

    // Forced-loss decision states still get an entry: here O threatens
    // column 3 and every X reply scores below -100
    assert!(policy.contains_key("XXO..O..._X"));

    // O decision states and terminal states are not part of an X policy
    assert!(!policy.contains_key("X........_O"));
    assert!(!policy.contains_key("XOXXOOOXX_X"));

    // Every entry addresses a legal linear position
    for (label, entry) in policy {
        let pos = entry.as_u64().unwrap();
        assert!((1..=9).contains(&pos), "entry {label} -> {pos}");
    }
}

#[test]
fn single_and_full_exports_cover_the_same_states() {
    let dir = tempfile::tempdir().unwrap();

    let mut keys = Vec::new();
    for mode in [PolicyMode::Single, PolicyMode::Full] {
        let path = dir.path().join(format!("policy_{mode:?}.json"));
        let args = AnalyzeArgs {
            board: None,
            mark: Mark::O,
            export: Some(path.clone()),
            mode,
        };
        execute(args).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let mut names: Vec<String> = value["policy"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        names.sort();
        keys.push(names);
    }

    assert_eq!(keys[0], keys[1]);
}

#[test]
fn full_mode_lists_every_tied_move() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy_full.json");

    let args = AnalyzeArgs {
        board: Some("XX.OO....".to_string()),
        mark: Mark::X,
        export: Some(path.clone()),
        mode: PolicyMode::Full,
    };
    execute(args).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["mode"], "full");

    // X holds (0,0) and (0,1); completing the top row at position 3 is the
    // unique immediate win, so nothing ties with it
    let entry = value["policy"]["XX.OO...._X"].as_array().unwrap();
    assert_eq!(entry.len(), 1);
    assert_eq!(entry[0], 3);
}
