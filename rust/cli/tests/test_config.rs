//! Configuration precedence: defaults, then the TOML file, then env vars.

mod helpers;
use helpers::{EnvGuard, run_cli};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn cfg_json() -> Value {
    let (code, out, err) = run_cli(&["cfg"]);
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).expect("cfg prints JSON")
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    let _env = EnvGuard::clean();
    let json = cfg_json();
    assert_eq!(json["rounds"]["value"], 12);
    assert_eq!(json["rounds"]["source"], "default");
    assert_eq!(json["ai"]["value"], "baseline");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["player_name"]["value"], "You");
}

#[test]
#[serial]
fn file_values_are_tagged_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rounds = 6\nseed = 77\nplayer_name = \"Hana\"").unwrap();
    let _env = EnvGuard::clean().set("KOIKOI_CONFIG", file.path().to_str().unwrap());

    let json = cfg_json();
    assert_eq!(json["rounds"]["value"], 6);
    assert_eq!(json["rounds"]["source"], "file");
    assert_eq!(json["seed"]["value"], 77);
    assert_eq!(json["player_name"]["value"], "Hana");
    assert_eq!(json["ai"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rounds = 6\nseed = 77").unwrap();
    let _env = EnvGuard::clean()
        .set("KOIKOI_CONFIG", file.path().to_str().unwrap())
        .set("KOIKOI_SEED", "5");

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 5);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["rounds"]["source"], "file");
}

#[test]
#[serial]
fn zero_rounds_is_rejected() {
    let _env = EnvGuard::clean().set("KOIKOI_ROUNDS", "0");
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("rounds must be >=1"));
    assert_eq!(err.matches("Invalid configuration").count(), 1, "{}", err);
}

#[test]
#[serial]
fn unknown_ai_is_rejected() {
    let _env = EnvGuard::clean().set("KOIKOI_AI", "oracle");
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("oracle"));
}

#[test]
#[serial]
fn malformed_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rounds = \"many\"").unwrap();
    let _env = EnvGuard::clean().set("KOIKOI_CONFIG", file.path().to_str().unwrap());
    let (code, _, err) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn configured_rounds_drive_sim() {
    let _env = EnvGuard::clean().set("KOIKOI_ROUNDS", "2");
    let (code, out, _) = run_cli(&["sim", "--matches", "1", "--seed", "3"]);
    assert_eq!(code, 0);
    assert!(out.contains("Simulated: 1 matches, 2 rounds (seed 3)"));
}
