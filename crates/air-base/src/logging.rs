use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable that overrides the default max level.
pub const LEVEL_ENV: &str = "AIR_LOG";

/// Where a [`LineLogger`] sends its lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LogSink {
    Stdout,
    /// One `YYYY-MM-DD.log` file per day inside the directory.
    Directory(PathBuf),
}

/// Line-oriented logger: `timestamp [LEVEL] target - message`.
pub struct LineLogger {
    level: LevelFilter,
    target: Mutex<Target>,
}

enum Target {
    Stdout,
    Daily { dir: PathBuf, date: String, file: File },
}

impl LineLogger {
    /// Create a logger for the given sink at the default level.
    ///
    /// For [`LogSink::Directory`] the directory is created if missing and
    /// today's file is opened in append mode.
    pub fn new(sink: LogSink) -> io::Result<Self> {
        let target = match sink {
            LogSink::Stdout => Target::Stdout,
            LogSink::Directory(dir) => {
                fs::create_dir_all(&dir)?;
                let date = format_today();
                let file = open_day_file(&dir, &date)?;
                Target::Daily { dir, date, file }
            }
        };

        Ok(Self {
            level: default_level(),
            target: Mutex::new(target),
        })
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

fn open_day_file(dir: &std::path::Path, date: &str) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

impl Log for LineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record);
        let mut target = self.target.lock().unwrap_or_else(|e| e.into_inner());

        match &mut *target {
            Target::Stdout => println!("{}", line),
            Target::Daily { dir, date, file } => {
                let today = format_today();
                if today != *date {
                    match open_day_file(dir.as_path(), &today) {
                        Ok(next) => {
                            *file = next;
                            *date = today;
                        }
                        // keep writing to yesterday's file
                        Err(e) => eprintln!("failed to roll log file in {:?}: {}", dir, e),
                    }
                }
                if let Err(e) = writeln!(file, "{}", line) {
                    eprintln!("failed to write log file: {}", e);
                    eprintln!("{}", line);
                }
            }
        }
    }

    fn flush(&self) {
        let mut target = self.target.lock().unwrap_or_else(|e| e.into_inner());
        match &mut *target {
            Target::Stdout => {
                io::stdout().flush().ok();
            }
            Target::Daily { file, .. } => {
                file.flush().ok();
            }
        }
    }
}

/// Render a record the way every sink writes it.
pub fn format_line(record: &Record) -> String {
    format!(
        "{} [{:<5}] {} - {}",
        format_timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
///
/// Unknown or missing values fall back to the build default: Debug for debug
/// builds, Info for release builds.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or_else(build_default_level)
}

fn build_default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn default_level() -> LevelFilter {
    parse_level(std::env::var(LEVEL_ENV).ok().as_deref())
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

fn unix_seconds() -> u64 {
    // a clock before 1970 reads as the epoch
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Days since the Unix epoch to a civil (year, month, day).
/// Howard Hinnant's algorithm: http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

fn install(logger: LineLogger) {
    let level = logger.level();
    // set_logger needs a &'static; a second install leaks one logger, which is
    // acceptable for a once-per-process call
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(level);
    }
}

/// Install a stdout [`LineLogger`] as the global logger.
///
/// Only the first call per process takes effect.
pub fn init_stdout_logger() {
    // Stdout never touches the filesystem
    if let Ok(logger) = LineLogger::new(LogSink::Stdout) {
        install(logger);
    }
}

/// Install a daily-file [`LineLogger`] writing into `dir` as the global logger.
///
/// Only the first call per process takes effect. Fails if the directory or
/// today's file cannot be created.
pub fn init_file_logger(dir: impl Into<PathBuf>) -> io::Result<()> {
    install(LineLogger::new(LogSink::Directory(dir.into()))?);
    Ok(())
}
