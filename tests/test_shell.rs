//! Session loop tests over in-memory readers and writers.

use residence_tracker::repositories::{InMemoryResidenceRepository, ResidenceRepository};
use residence_tracker::shell::{run_session, MESSAGE_INPUT_NOT_UTF8, MESSAGE_INPUT_TOO_LONG};
use residence_tracker::Config;

fn quiet_config() -> Config {
    Config {
        prompt: String::new(),
        ..Config::default()
    }
}

async fn run(input: &str, config: &Config) -> (String, InMemoryResidenceRepository, usize) {
    run_bytes(input.as_bytes(), config).await
}

async fn run_bytes(
    input: &[u8],
    config: &Config,
) -> (String, InMemoryResidenceRepository, usize) {
    let mut repo = InMemoryResidenceRepository::new();
    let mut output: Vec<u8> = Vec::new();
    let processed = run_session(input, &mut output, &mut repo, config)
        .await
        .unwrap();
    (String::from_utf8(output).unwrap(), repo, processed)
}

#[tokio::test]
async fn test_one_response_per_command() {
    let input = "add n/Loft p/123 e/a@bc a/1 Hill St\nlist\nfind loft\n";
    let (output, repo, processed) = run(input, &quiet_config()).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(processed, 3);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("New residence added: Loft"));
    assert_eq!(lines[1], "Listed all residences");
    assert_eq!(lines[2], "1 residences listed!");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_errors_do_not_end_session() {
    let input = "bogus\ndelete 1\nadd n/Loft p/123 e/a@bc a/1 Hill St\n";
    let (output, repo, _) = run(input, &quiet_config()).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Unknown command");
    assert_eq!(lines[1], "The residence index provided is invalid");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_exit_stops_reading() {
    let input = "exit\nadd n/Loft p/123 e/a@bc a/1 Hill St\n";
    let (output, repo, processed) = run(input, &quiet_config()).await;

    assert_eq!(processed, 1);
    assert!(output.starts_with("Exiting"));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let (output, _, processed) = run("\n   \nlist\n", &quiet_config()).await;
    assert_eq!(processed, 3);
    assert_eq!(output, "Listed all residences\n");
}

#[tokio::test]
async fn test_prompt_is_written_before_each_read() {
    let config = Config {
        prompt: "> ".to_string(),
        ..Config::default()
    };
    let (output, _, _) = run("list\n", &config).await;
    assert_eq!(output, "> Listed all residences\n> ");
}

#[tokio::test]
async fn test_over_long_input_is_rejected() {
    let config = Config {
        prompt: String::new(),
        max_input_length: 10,
        ..Config::default()
    };
    let (output, repo, _) = run("add n/Loft p/123 e/a@bc a/1 Hill St\n", &config).await;
    assert_eq!(output.trim_end(), MESSAGE_INPUT_TOO_LONG);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_over_long_input_does_not_swallow_next_command() {
    let config = Config {
        prompt: String::new(),
        max_input_length: 40,
        ..Config::default()
    };
    let input = format!("{}\nadd n/Loft p/123 e/a@bc a/1 Hill St\n", "x".repeat(5_000));
    let (output, repo, processed) = run(&input, &config).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(processed, 2);
    assert_eq!(lines[0], MESSAGE_INPUT_TOO_LONG);
    assert!(lines[1].starts_with("New residence added: Loft"));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_session() {
    let input = b"list\n\xff\xfe bogus\nadd n/Loft p/123 e/a@bc a/1 Hill St\n";
    let (output, repo, processed) = run_bytes(input, &quiet_config()).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(processed, 3);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Listed all residences");
    assert_eq!(lines[1], MESSAGE_INPUT_NOT_UTF8);
    assert!(lines[2].starts_with("New residence added: Loft"));
    assert_eq!(repo.len(), 1);
}
