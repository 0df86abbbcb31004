use headsup_cli::config::{
    ENV_CHECKED_STREETS, ENV_CONFIG, ENV_SEED, ENV_STACK, ENV_THINK_MS, ValueSource,
    load_with_sources,
};
use headsup_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    for key in [ENV_CONFIG, ENV_SEED, ENV_STACK, ENV_THINK_MS, ENV_CHECKED_STREETS] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn cfg_json() -> (i32, Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["headsup", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json, String::from_utf8_lossy(&err).into_owned())
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["small_blind"]["value"].as_u64(), Some(10));
    assert_eq!(json["big_blind"]["value"].as_u64(), Some(20));
    assert_eq!(json["advance_on_checked_street"]["value"].as_bool(), Some(true));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 456\nstarting_stack = 500\nthink_ms = 10").unwrap();
    set_env(ENV_CONFIG, file.path().to_str().unwrap());
    set_env(ENV_SEED, "789");

    let resolved = load_with_sources().unwrap();
    assert_eq!(resolved.config.seed, Some(789));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert_eq!(resolved.config.starting_stack, 500);
    assert_eq!(resolved.sources.starting_stack, ValueSource::File);
    assert_eq!(resolved.config.think_ms, 10);
    assert_eq!(resolved.sources.big_blind, ValueSource::Default);

    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["think_ms"]["source"].as_str(), Some("file"));
    clear_env();
}

#[test]
#[serial]
fn checked_streets_flag_from_env() {
    clear_env();
    set_env(ENV_CHECKED_STREETS, "off");
    let resolved = load_with_sources().unwrap();
    assert!(!resolved.config.advance_on_checked_street);
    assert!(!resolved.config.rules().advance_on_checked_street);

    // play warns that checked streets stall
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut input = std::io::Cursor::new(b"q\n".to_vec());
    let code = headsup_cli::run_with_input(
        ["headsup", "play", "--think-ms", "0", "--seed", "1"],
        &mut input,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&err).contains("WARNING: streets checked through"));
    clear_env();
}

#[test]
#[serial]
fn invalid_values_exit_with_error() {
    clear_env();
    set_env(ENV_STACK, "lots");
    let (code, _, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error: Invalid starting stack: lots"));

    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "small_blind = 30\nbig_blind = 20").unwrap();
    set_env(ENV_CONFIG, file.path().to_str().unwrap());
    let (code, _, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(stderr.contains("small_blind < big_blind"));

    clear_env();
    set_env(ENV_STACK, "4294967295");
    let (code, _, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(stderr.contains("starting_stack must be <= 2147483647"));
    clear_env();
}

#[test]
#[serial]
fn small_stack_session_stops_when_blinds_cannot_be_posted() {
    clear_env();
    set_env(ENV_STACK, "25");
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut input = std::io::Cursor::new(b"fold\nfold\nfold\n".to_vec());
    let code = headsup_cli::run_with_input(
        ["headsup", "play", "--think-ms", "0", "--seed", "3"],
        &mut input,
        &mut out,
        &mut err,
    );
    clear_env();
    assert_eq!(code, 0);
    let stdout = String::from_utf8_lossy(&out);
    // 25 -> 15 (fold as dealer) -> big blind of 20 no longer fits
    assert!(stdout.contains("A stack can no longer cover the blinds."));
    assert!(stdout.contains("Hands played: 1"));
    assert!(stdout.contains("Final chips: you 15, AI 35"));
}
