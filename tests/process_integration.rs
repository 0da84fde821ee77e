//! Integration tests for running child processes end to end.

#![cfg(unix)]

use std::time::Duration;

use undertow::prelude::*;
use undertow::process::{self, ExitError, ProcessError, ProcessFate, SpawnConfig, SpawnOptions};
use undertow::stream;

fn bash(script: &str) -> SpawnOptions {
    SpawnOptions::new("bash").args(["-c", script])
}

#[tokio::test]
async fn test_run_captures_stdout() {
    let result = process::run::<()>(bash(r#"echo "Hello, World!""#))
        .run(&())
        .await
        .unwrap();

    assert_eq!(result.stdout, "Hello, World!\n");
    assert_eq!(result.stderr, "");
    assert_eq!(result.fate, ProcessFate::Exited(0));
    assert!(result.pid > 0);
}

#[tokio::test]
async fn test_nonzero_exit_carries_code_and_output() {
    let error = process::run::<()>(bash("echo partial; echo oops >&2; exit 2"))
        .run(&())
        .await
        .unwrap_err();

    match error {
        ProcessError::Exit { result, error } => {
            assert_eq!(error, ExitError::Code(2));
            assert_eq!(result.fate, ProcessFate::Exited(2));
            assert_eq!(result.stdout, "partial\n");
            assert_eq!(result.stderr, "oops\n");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_killed_process_reports_signal_name() {
    let error = process::run::<()>(bash("kill -9 $$"))
        .run(&())
        .await
        .unwrap_err();

    match error {
        ProcessError::Exit { result, error } => {
            assert_eq!(error, ExitError::Signal("SIGKILL".to_string()));
            assert_eq!(result.fate, ProcessFate::Killed("SIGKILL".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_stdin_is_fed_to_the_process() {
    let result = lift(stream::create(r#"echo "Hello, World!""#))
        .and_then(|stdin| process::run_with_stdin(stdin, SpawnOptions::new("bash")))
        .run(&())
        .await
        .unwrap();

    assert_eq!(result.stdout, "Hello, World!\n");
}

#[tokio::test]
async fn test_multi_chunk_stdin_arrives_in_order() {
    let input = stream::from_chunks(["one\n", "two\n", "three\n"]);
    let result = process::run_with_stdin::<()>(input, SpawnOptions::new("cat"))
        .run(&())
        .await
        .unwrap();

    assert_eq!(result.stdout, "one\ntwo\nthree\n");
}

#[tokio::test]
async fn test_large_stdin_is_fed_while_output_drains() {
    // Several pipe buffers' worth, in many chunks.
    let chunks = (0..64).map(|i| vec![b'a' + (i % 26) as u8; 16 * 1024]);
    let expected: Vec<u8> = chunks.clone().flatten().collect();

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        process::run_with_stdin::<()>(stream::from_chunks(chunks), SpawnOptions::new("cat")).run(&()),
    )
    .await
    .expect("stdin feed deadlocked")
    .unwrap();

    assert_eq!(result.stdout.as_bytes(), expected.as_slice());
}

#[tokio::test]
async fn test_large_output_on_both_streams_does_not_deadlock() {
    // Each stream gets far more than a pipe buffer holds.
    let script = "head -c 1048576 /dev/zero | tr '\\0' o; head -c 1048576 /dev/zero | tr '\\0' e >&2";

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        process::run::<()>(bash(script)).run(&()),
    )
    .await
    .expect("gather deadlocked")
    .unwrap();

    assert_eq!(result.stdout.len(), 1 << 20);
    assert_eq!(result.stderr.len(), 1 << 20);
    assert!(result.stdout.bytes().all(|b| b == b'o'));
    assert!(result.stderr.bytes().all(|b| b == b'e'));
}

#[tokio::test]
async fn test_spawn_config_reaches_the_child() {
    let dir = tempfile::tempdir().unwrap();
    let config = SpawnConfig {
        current_dir: Some(dir.path().to_path_buf()),
        env: [("UNDERTOW_GREETING".to_string(), "hi".to_string())].into(),
        env_clear: false,
    };

    let result = process::run::<()>(bash("echo $UNDERTOW_GREETING; pwd").options(config))
        .run(&())
        .await
        .unwrap();

    let expected_dir = dir.path().canonicalize().unwrap();
    assert_eq!(result.stdout, format!("hi\n{}\n", expected_dir.display()));
}

#[tokio::test]
async fn test_missing_program_is_a_spawn_failure() {
    let error = process::run::<()>(SpawnOptions::new("undertow-definitely-missing"))
        .run(&())
        .await
        .unwrap_err();

    assert!(matches!(error, ProcessError::Spawn { ref command, .. } if command == "undertow-definitely-missing"));
}
