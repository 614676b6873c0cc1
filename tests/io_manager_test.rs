//! Tests for the output path manager through its public protocol.

use simio::constants::keys;
use simio::{Error, IoManager, Manager, StatusDict, StatusValue};

fn status(io: &impl Manager) -> StatusDict {
    let mut out = StatusDict::new();
    io.get_status(&mut out);
    out
}

#[test]
fn test_init_then_get_status_yields_defaults() {
    let mut io = IoManager::new();
    io.init();

    let out = status(&io);
    assert_eq!(out.get_str(keys::DATA_PATH).unwrap(), Some(""));
    assert_eq!(out.get_str(keys::DATA_PREFIX).unwrap(), Some(""));
    assert_eq!(out.get_bool(keys::OVERWRITE_FILES).unwrap(), Some(false));
}

#[test]
fn test_valid_path_and_prefix_are_stored() {
    let cases = [
        ("", ""),
        ("/tmp/out", "run1_"),
        ("relative/dir", "a.b-c"),
        ("C:\\data", "x"),
        ("/with space/", "é_"),
    ];

    for (path, prefix) in cases {
        let mut io = IoManager::new();
        let mut update = StatusDict::new();
        update.insert(keys::DATA_PATH, path);
        update.insert(keys::DATA_PREFIX, prefix);
        io.set_status(&update).unwrap();

        assert_eq!(io.data_path(), path);
        assert_eq!(io.data_prefix(), prefix);
    }
}

#[test]
fn test_invalid_prefix_is_reported_and_prior_value_kept() {
    let mut io = IoManager::new();
    let mut update = StatusDict::new();
    update.insert(keys::DATA_PREFIX, "good_");
    io.set_status(&update).unwrap();

    for bad in ["run1/x", "/", "a/", "/b", "../escape"] {
        let mut update = StatusDict::new();
        update.insert(keys::DATA_PREFIX, bad);
        let err = io.set_status(&update).unwrap_err();

        assert!(
            matches!(&err, Error::InvalidConfigurationValue { key, value, .. }
                if key == keys::DATA_PREFIX && value == bad),
            "unexpected error for {bad}: {err}"
        );
        assert_eq!(io.data_prefix(), "good_");
    }
}

#[test]
fn test_scenario_path_and_overwrite() {
    let mut io = IoManager::new();
    let update = StatusDict::from_json(r#"{"data_path":"/tmp/out","overwrite_files":true}"#).unwrap();
    io.set_status(&update).unwrap();

    assert_eq!(io.data_path(), "/tmp/out");
    assert!(io.overwrite_files());
    assert_eq!(io.data_prefix(), "");
}

#[test]
fn test_scenario_prefix_with_separator_rejected() {
    let mut io = IoManager::new();
    let update = StatusDict::from_json(r#"{"data_prefix":"run1/x"}"#).unwrap();

    assert!(io.set_status(&update).is_err());
    assert_eq!(io.data_prefix(), "");
}

#[test]
fn test_reset_twice_matches_reset_once() {
    let mut once = IoManager::new();
    let mut twice = IoManager::new();
    let mut update = StatusDict::new();
    update.insert(keys::DATA_PATH, "/data");
    update.insert(keys::OVERWRITE_FILES, true);
    once.set_status(&update).unwrap();
    twice.set_status(&update).unwrap();

    once.reset();
    twice.reset();
    twice.reset();

    assert_eq!(status(&once), status(&twice));
    assert_eq!(once, twice);
}

#[test]
fn test_last_writer_wins_per_key() {
    let mut io = IoManager::new();
    let updates = [
        r#"{"data_path": "/a", "data_prefix": "p1_"}"#,
        r#"{"overwrite_files": true}"#,
        r#"{"data_path": "/b"}"#,
        r#"{"data_prefix": "bad/prefix", "overwrite_files": false}"#,
        r#"{"data_prefix": "p2_", "unknown": 5}"#,
    ];
    for json in updates {
        let _ = io.set_status(&StatusDict::from_json(json).unwrap());
    }

    let out = status(&io);
    assert_eq!(out.get_str(keys::DATA_PATH).unwrap(), Some("/b"));
    assert_eq!(out.get_str(keys::DATA_PREFIX).unwrap(), Some("p2_"));
    // The rejected update also carried overwrite_files = false; it was discarded whole.
    assert_eq!(out.get_bool(keys::OVERWRITE_FILES).unwrap(), Some(true));
    assert!(!out.contains_key("unknown"));
}

#[test]
fn test_get_status_preserves_caller_entries() {
    let io = IoManager::new();
    let mut out = StatusDict::new();
    out.insert("resolution", 0.1_f64);
    out.insert(keys::DATA_PATH, "stale");
    io.get_status(&mut out);

    assert_eq!(out.get("resolution"), Some(&StatusValue::Double(0.1)));
    assert_eq!(out.get_str(keys::DATA_PATH).unwrap(), Some(""));
}

#[test]
fn test_manager_trait_objects_cycle_uniformly() {
    let mut managers: Vec<Box<dyn Manager>> = vec![Box::new(IoManager::new())];

    let update = StatusDict::from_json(r#"{"data_prefix": "sim_"}"#).unwrap();
    for manager in &mut managers {
        manager.set_status(&update).unwrap();
    }
    for manager in &mut managers {
        manager.reset();
    }

    let mut out = StatusDict::new();
    for manager in &managers {
        assert_eq!(manager.name(), "io");
        manager.get_status(&mut out);
    }
    assert_eq!(out.get_str(keys::DATA_PREFIX).unwrap(), Some(""));
}

#[test]
fn test_status_round_trips_through_json() {
    let mut io = IoManager::new();
    io.set_status(
        &StatusDict::from_json(r#"{"data_path": "/d", "data_prefix": "p_", "overwrite_files": true}"#)
            .unwrap(),
    )
    .unwrap();

    let json = status(&io).to_json().unwrap();
    let mut restored = IoManager::new();
    restored
        .set_status(&StatusDict::from_json(&json).unwrap())
        .unwrap();

    assert_eq!(restored, io);
}
