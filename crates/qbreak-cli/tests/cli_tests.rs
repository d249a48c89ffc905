//! CLI parsing, configuration and script replay tests.

use std::fs;
use std::path::Path;

use clap::Parser;

use qbreak_cli::commands::common::{load_script, replay, resolve_config};
use qbreak_cli::config::QbreakConfig;
use qbreak_cli::{Cli, Commands, SessionArgs};
use qbreak_editor::EditError;
use qbreak_grid::{EffectiveKind, GateKind, GateOp};

fn session_args(script: &str) -> SessionArgs {
    SessionArgs {
        script: Some(script.to_string()),
        input: None,
        wires: None,
        columns: None,
        rotation_step: None,
    }
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn parse_edit_with_script() {
    let cli = Cli::try_parse_from(["qbreak", "edit", "-s", "h d x"]).unwrap();
    match cli.command {
        Commands::Edit { session, json } => {
            assert_eq!(session.script.as_deref(), Some("h d x"));
            assert!(session.input.is_none());
            assert!(session.wires.is_none());
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_run_with_overrides() {
    let cli = Cli::try_parse_from([
        "qbreak",
        "-vv",
        "run",
        "--input",
        "bell.txt",
        "--wires",
        "2",
        "--columns",
        "4",
        "--rotation-step",
        "-0.5",
        "--shots",
        "100",
        "--seed",
        "7",
        "--json",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Run {
            session,
            shots,
            seed,
            json,
        } => {
            assert_eq!(session.input.as_deref(), Some(Path::new("bell.txt")));
            assert_eq!(session.wires, Some(2));
            assert_eq!(session.columns, Some(4));
            assert_eq!(session.rotation_step, Some(-0.5));
            assert_eq!(shots, Some(100));
            assert_eq!(seed, Some(7));
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_requires_script_source() {
    assert!(Cli::try_parse_from(["qbreak", "edit"]).is_err());
    assert!(Cli::try_parse_from(["qbreak", "run", "--wires", "2"]).is_err());
}

#[test]
fn parse_rejects_two_script_sources() {
    let result = Cli::try_parse_from(["qbreak", "edit", "-s", "h", "-i", "script.txt"]);
    assert!(result.is_err());
}

#[test]
fn parse_config_flag() {
    let cli = Cli::try_parse_from(["qbreak", "--config", "/tmp/q.yaml", "version"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/q.yaml")));
    assert!(matches!(cli.command, Commands::Version));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "grid:\n  wires: 4\n  columns: 6\nshots: 32\n").unwrap();

    let config = QbreakConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.grid.wires, 4);
    assert_eq!(config.grid.columns, 6);
    assert_eq!(config.shots, 32);
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    assert!(QbreakConfig::load(Some(dir.path().join("missing.yaml").as_path())).is_err());
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "grid:\n  wires: 4\nrotation_step: 0.25\nshots: 8\n").unwrap();

    let mut args = session_args("h");
    args.wires = Some(2);
    let config = resolve_config(Some(path.as_path()), &args, Some(50)).unwrap();
    assert_eq!(config.grid.wires, 2);
    assert_eq!(config.rotation_step, 0.25);
    assert_eq!(config.shots, 50);
}

#[test]
fn zero_shots_rejected() {
    let config = QbreakConfig::default().with_overrides(&session_args("h"), Some(0));
    assert!(config.is_err());
}

// ============================================================================
// Script replay
// ============================================================================

#[test]
fn script_read_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bell.txt");
    fs::write(&path, "# bell pair\nh d\ns x c\n").unwrap();

    let args = SessionArgs {
        script: None,
        input: Some(path),
        wires: None,
        columns: None,
        rotation_step: None,
    };
    let script = load_script(&args).unwrap();
    let session = replay(&QbreakConfig::default(), &script).unwrap();
    assert_eq!(session.commands, 5);

    let names: Vec<&str> = session
        .editor
        .grid()
        .compile()
        .unwrap()
        .iter()
        .map(GateOp::name)
        .collect();
    assert_eq!(names, vec!["h", "cx"]);
}

#[test]
fn rejected_commands_become_diagnostics() {
    let session = replay(&QbreakConfig::default(), "x x d y").unwrap();
    assert_eq!(session.commands, 4);
    assert_eq!(
        session.diagnostics,
        vec![(
            2,
            EditError::InvalidPlacement {
                wire: 0,
                column: 0,
                found: EffectiveKind::Gate(GateKind::PauliX),
            }
        )]
    );
    assert_eq!(session.editor.grid().gate_count(), 2);
}

#[test]
fn unknown_token_fails_replay() {
    assert!(replay(&QbreakConfig::default(), "h jump").is_err());
}

#[test]
fn invalid_dimensions_fail_replay() {
    let mut config = QbreakConfig::default();
    config.grid.wires = 0;
    assert!(replay(&config, "h").is_err());
}

#[test]
fn oversized_columns_fail_replay() {
    let mut config = QbreakConfig::default();
    config.grid.columns = usize::MAX;
    assert!(replay(&config, "h").is_err());
}

#[test]
fn configured_rotation_step_is_used() {
    let mut config = QbreakConfig::default();
    config.rotation_step = 0.5;
    let session = replay(&config, "z rot+ rot+").unwrap();
    let node = session.editor.grid().get(0, 0).unwrap();
    assert!((node.rotation - 1.0).abs() < 1e-12);
}
