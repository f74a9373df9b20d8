//! Line-oriented session loop.
//!
//! Reads one command per line, runs it to completion against the
//! repository, and writes exactly one response before reading the next line.

use crate::commands::CommandResult;
use crate::config::Config;
use crate::error::TrackerError;
use crate::parser::parse_command;
use crate::repositories::ResidenceRepository;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Shown instead of parsing when a line exceeds the configured limit.
pub const MESSAGE_INPUT_TOO_LONG: &str = "Input is too long";

/// Shown instead of parsing when a line is not valid UTF-8.
pub const MESSAGE_INPUT_NOT_UTF8: &str = "Input is not valid UTF-8";

/// One line read from the session input.
#[derive(Debug, PartialEq, Eq)]
enum InputLine {
    Text(String),
    TooLong,
    NotUtf8,
}

/// Parse and execute one line of input.
pub fn execute_line(
    repo: &mut dyn ResidenceRepository,
    line: &str,
) -> Result<CommandResult, TrackerError> {
    let command = parse_command(line).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected input");
    })?;

    tracing::debug!(command = command.word(), "Executing command");
    match command.execute(repo) {
        Ok(result) => {
            tracing::debug!(
                command = command.word(),
                residences = repo.len(),
                "Command succeeded"
            );
            Ok(result)
        }
        Err(e) => {
            tracing::debug!(command = command.word(), error = %e, "Command failed");
            Err(e.into())
        }
    }
}

/// Read the next line, buffering at most `max_len` bytes of it.
///
/// The limit counts the bytes before the line terminator. Whatever is left of
/// an over-long line is skipped so the next read starts on a fresh line.
/// Returns `None` at end of input.
async fn read_input_line<R>(reader: &mut R, max_len: usize) -> io::Result<Option<InputLine>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let read = (&mut *reader)
        .take(max_len as u64 + 1)
        .read_until(b'\n', &mut buf)
        .await?;
    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if buf.len() > max_len {
        skip_rest_of_line(reader).await?;
        return Ok(Some(InputLine::TooLong));
    }

    Ok(Some(match String::from_utf8(buf) {
        Ok(line) => InputLine::Text(line),
        Err(_) => InputLine::NotUtf8,
    }))
}

/// Consume input up to and including the next newline.
async fn skip_rest_of_line<R>(reader: &mut R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }
        let (used, done) = match available.iter().position(|&b| b == b'\n') {
            Some(i) => (i + 1, true),
            None => (available.len(), false),
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}

/// Run a session until `exit` or end of input.
///
/// Returns the number of lines processed.
pub async fn run_session<R, W>(
    mut reader: R,
    writer: &mut W,
    repo: &mut dyn ResidenceRepository,
    config: &Config,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut processed = 0;

    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(input) = read_input_line(&mut reader, config.max_input_length).await? else {
            tracing::info!("End of input");
            break;
        };
        processed += 1;

        let line = match input {
            InputLine::Text(line) => line,
            InputLine::TooLong => {
                tracing::warn!(limit = config.max_input_length, "Input exceeds maximum length");
                write_line(writer, MESSAGE_INPUT_TOO_LONG).await?;
                continue;
            }
            InputLine::NotUtf8 => {
                tracing::warn!("Input is not valid UTF-8");
                write_line(writer, MESSAGE_INPUT_NOT_UTF8).await?;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let (feedback, exit) = match execute_line(repo, &line) {
            Ok(result) => (result.feedback, result.exit),
            Err(e) => (e.to_string(), false),
        };
        write_line(writer, &feedback).await?;

        if exit {
            break;
        }
    }

    writer.flush().await?;
    Ok(processed)
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(format!("{}\n", text).as_bytes()).await
}
