//! Tracing setup for the dashboard.
//!
//! One global, reloadable level filter sits above two layers: stdout
//! (colored on a terminal, and gated so it can be switched off) and a log
//! file that can be opened after startup.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber, debug};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingSection;

/// `<local time> <LEVEL> <file:line> <fields>`
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        match (ansi, level_color(*meta.level())) {
            (true, color) => write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?,
            (false, _) => write!(writer, "{:>5} ", meta.level())?,
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = short_source_path(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

/// Drops everything up to and including the crate's `src/` directory.
fn short_source_path(file: &str) -> &str {
    ["src/", "src\\"]
        .iter()
        .filter_map(|sep| file.rfind(sep).map(|i| &file[i + sep.len()..]))
        .next()
        .unwrap_or(file)
}

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writer whose target file can be set after the subscriber is installed.
/// Writes are discarded while it is empty.
#[derive(Clone, Default)]
struct LogFileSlot(SharedFile);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut *self.0 {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFileSlot {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

type ReloadFn<T> = Box<dyn Fn(T) -> Result<()> + Send + Sync>;

static LEVEL_RELOAD: OnceLock<ReloadFn<EnvFilter>> = OnceLock::new();
static STDOUT_RELOAD: OnceLock<ReloadFn<EnvFilter>> = OnceLock::new();
static LOG_FILE: OnceLock<SharedFile> = OnceLock::new();

fn store_reload<S>(slot: &OnceLock<ReloadFn<EnvFilter>>, handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = slot.set(Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("filter reload failed: {e}"))
    }));
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| anyhow!("invalid log level '{directive}': {e}"))
}

/// Replaces the global filter. Accepts a bare level or any `EnvFilter`
/// directive.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = parse_filter(directive)?;
    match LEVEL_RELOAD.get() {
        Some(reload) => reload(filter),
        None => bail!("logging not yet initialized"),
    }
}

/// Turns stdout output on or off. The file layer is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    match STDOUT_RELOAD.get() {
        Some(reload) => reload(filter),
        None => bail!("logging not yet initialized"),
    }
}

/// Appends log output to `path`, replacing any file already open.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    match LOG_FILE.get() {
        Some(slot) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => bail!("logging not yet initialized"),
    }
}

/// Installs the subscriber, then applies `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_logging(config: &LoggingSection) -> Result<()> {
    let file = SharedFile::default();
    let _ = LOG_FILE.set(file.clone());

    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();

    let (level_filter, level_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(LogFileSlot(file));

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    store_reload(&LEVEL_RELOAD, level_handle);
    store_reload(&STDOUT_RELOAD, stdout_handle);

    if !from_env {
        set_log_level(&config.level)?;
    }
    if !config.stdout {
        set_stdout_enabled(false)?;
    }
    if let Some(path) = &config.file {
        enable_file_logging(path)?;
    }

    debug!(level = %config.level, from_env, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn source_paths_are_shortened() {
        assert_eq!(short_source_path("src/dashboard.rs"), "dashboard.rs");
        assert_eq!(
            short_source_path("yield-ui/src/components/prediction_form.rs"),
            "components/prediction_form.rs"
        );
        assert_eq!(short_source_path("build.rs"), "build.rs");
    }

    #[test]
    fn empty_slot_swallows_writes() {
        let slot = LogFileSlot::default();
        let mut writer = slot.make_writer();

        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        writer.flush().unwrap();
    }

    #[test]
    fn bad_directive_is_rejected() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("yield_core=debug,warn").is_ok());
        assert!(parse_filter("yield_ui=loud").is_err());
    }
}
