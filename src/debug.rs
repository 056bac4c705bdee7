//! Debug logging infrastructure for par-deck
//!
//! Controlled by the DEBUG_LEVEL environment variable:
//! - 0 or unset: No debugging
//! - 1: Errors only
//! - 2: Info level (tab lifecycle events)
//! - 3: Debug level (ignored requests, focus changes)
//! - 4: Trace level
//!
//! All output goes to /tmp/par_deck_debug.log on Unix/macOS,
//! or %TEMP%\par_deck_debug.log on Windows, so it never mixes with the
//! output of the view layer.
//!
//! [`init_log_bridge`] routes the `log` facade into the same file.

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Self {
        match std::env::var("DEBUG_LEVEL") {
            Ok(val) => Self::parse(&val),
            Err(_) => DebugLevel::Off,
        }
    }

    fn parse(val: &str) -> Self {
        match val.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Error,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/par_deck_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("par_deck_debug.log")
    }
}

/// File sink shared by every log record
struct DebugLogger {
    file: Option<std::fs::File>,
}

impl DebugLogger {
    fn open(filter: log::LevelFilter) -> Self {
        if filter == log::LevelFilter::Off {
            return DebugLogger { file: None };
        }

        match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            Ok(f) => {
                let mut logger = DebugLogger { file: Some(f) };
                logger.write_raw(&format!(
                    "\n{}\npar-deck debug session started at {} (level={})\n{}\n",
                    "=".repeat(80),
                    get_timestamp(),
                    filter,
                    "=".repeat(80)
                ));
                logger
            }
            // Silently fail if log file can't be opened
            Err(_) => DebugLogger { file: None },
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_record(record: &log::Record<'_>) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        get_timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

/// `log::Log` implementation writing to the debug file and, optionally,
/// stderr
struct LogBridge {
    sink: Mutex<DebugLogger>,
    mirror_stderr: bool,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        self.sink.lock().write_raw(&line);
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(ref mut file) = self.sink.lock().file {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Resolve the effective level: explicit override, then RUST_LOG, then
/// DEBUG_LEVEL.
fn resolve_filter(override_level: Option<log::LevelFilter>) -> log::LevelFilter {
    if let Some(level) = override_level {
        return level;
    }
    if let Ok(val) = std::env::var("RUST_LOG")
        && let Ok(level) = val.trim().parse::<log::LevelFilter>()
    {
        return level;
    }
    DebugLevel::from_env().to_level_filter()
}

/// Install the log bridge. Later calls only adjust the max level.
///
/// When RUST_LOG is set, records are also mirrored to stderr.
pub fn init_log_bridge(override_level: Option<log::LevelFilter>) {
    let filter = resolve_filter(override_level);
    let mut installed_now = false;
    let bridge = BRIDGE.get_or_init(|| {
        installed_now = true;
        LogBridge {
            sink: Mutex::new(DebugLogger::open(filter)),
            mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
        }
    });
    if installed_now && log::set_logger(bridge).is_err() {
        eprintln!("par-deck: a logger was already installed");
    }
    log::set_max_level(filter);
}
