/*
[INPUT]:  Log level directive, output target, optional log file path
[OUTPUT]: Global tracing subscriber plus the file writer guard
[POS]:    Logging setup shared by dry-run and TUI modes
[UPDATE]: When changing log destinations or formatting
*/

use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use crate::tui::{LogBufferHandle, LogWriterFactory};

/// Where formatted events go besides the optional log file
pub enum LogTarget {
    /// Plain stderr, used when no screen is drawn
    Stderr,
    /// In-memory ring shown in the logs panel; stderr would corrupt the screen
    Buffer(LogBufferHandle),
}

/// Install the global subscriber.
///
/// The returned guard must be held until exit so buffered file lines are flushed.
pub fn init_tracing(
    log_level: &str,
    target: LogTarget,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = parse_filter(log_level)?;
    let (file_writer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = open_log_file(path)?;
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let ansi = matches!(target, LogTarget::Stderr) && file_writer.is_none();
    let writer = match (target, file_writer) {
        (LogTarget::Stderr, None) => BoxMakeWriter::new(io::stderr),
        (LogTarget::Stderr, Some(file)) => BoxMakeWriter::new(io::stderr.and(file)),
        (LogTarget::Buffer(handle), None) => BoxMakeWriter::new(LogWriterFactory::new(handle)),
        (LogTarget::Buffer(handle), Some(file)) => {
            BoxMakeWriter::new(LogWriterFactory::new(handle).and(file))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn parse_filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level).context("invalid log level")
}

fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("log file path must end in a utf-8 file name")?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn accepts_level_and_directive_filters() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("todo_core=debug,warn").is_ok());
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(parse_filter("todo_core=loud").is_err());
    }

    #[test]
    fn log_file_receives_lines_after_guard_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("todo.log");

        let (writer, guard) = open_log_file(&path).unwrap();
        writer
            .make_writer()
            .write_all(b"task added\n")
            .unwrap();
        drop(guard);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "task added\n");
    }

    #[test]
    fn log_file_path_needs_a_file_name() {
        assert!(open_log_file(Path::new("/")).is_err());
    }
}
